pub mod prelude {
    pub use festapp_core::{
        entities::*,
        fixtures::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self { db_connections }
        }

        pub fn seed_demo_event(&self) -> DemoEvent {
            self.db_connections
                .exclusive()
                .unwrap()
                .transaction(|conn| seed_demo_event(conn))
                .unwrap()
        }

        pub fn count_rows_of_event(&self, family: Family, event_id: RowId) -> usize {
            self.db_connections
                .shared()
                .unwrap()
                .count_rows_of_event(family, event_id)
                .unwrap()
        }

        pub fn try_get_event(&self, id: RowId) -> Option<Event> {
            match self
                .db_connections
                .exclusive()
                .unwrap()
                .transaction(|conn| conn.get_event(id))
            {
                Ok(event) => Some(event),
                Err(usecases::Error::Repo(RepoError::NotFound)) => None,
                x => x.map(|_| None).unwrap(),
            }
        }
    }
}

use self::prelude::*;

#[test]
fn clone_event_for_another_user() {
    let fixture = BackendFixture::new();
    let demo = fixture.seed_demo_event();

    let new_event_id =
        flows::clone_event_for_user(&fixture.db_connections, demo.event_id, demo.target_user_id)
            .unwrap();

    let event = fixture.try_get_event(new_event_id).unwrap();
    assert_eq!("Summer Fest Demo", event.name);
    assert_eq!(demo.target_user_id, event.user_id);
    for family in [Family::Directory, Family::Guest, Family::Lookup] {
        assert_eq!(
            fixture.count_rows_of_event(family, demo.event_id),
            fixture.count_rows_of_event(family, new_event_id)
        );
    }
}

#[test]
fn clone_missing_event() {
    let fixture = BackendFixture::new();
    let demo = fixture.seed_demo_event();
    let err = flows::clone_event_for_user(&fixture.db_connections, 999, demo.target_user_id)
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(fixture.try_get_event(demo.other_event_id + 1).is_none());
}

#[test]
fn clone_for_missing_user() {
    let fixture = BackendFixture::new();
    let demo = fixture.seed_demo_event();
    let err = flows::clone_event_for_user(&fixture.db_connections, demo.event_id, 999)
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn record_install_of_event() {
    let fixture = BackendFixture::new();
    let demo = fixture.seed_demo_event();
    flows::record_install(&fixture.db_connections, demo.event_id).unwrap();
    let err = flows::record_install(&fixture.db_connections, 999).unwrap_err();
    assert!(err.is_not_found());
}
