pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{directory_builder::*, event_builder::*, guest_builder::*};

pub mod event_builder {

    use super::*;
    use crate::{event::*, id::*};

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: RowId) -> Self {
            self.event.id = id;
            self
        }
        pub fn user_id(mut self, user_id: RowId) -> Self {
            self.event.user_id = user_id;
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.event.name = name.into();
            self
        }
        pub fn token(mut self, token: &str) -> Self {
            self.event.token = token.into();
            self
        }
        pub fn description(mut self, desc: Option<&str>) -> Self {
            self.event.description = desc.map(Into::into);
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }
    }

    impl Builder for Event {
        type Build = EventBuild;
        fn build() -> EventBuild {
            EventBuild {
                event: Event {
                    id: UNSET_ID,
                    user_id: UNSET_ID,
                    name: "".into(),
                    token: "".into(),
                    description: None,
                    created_at: 0,
                },
            }
        }
    }
}

pub mod directory_builder {

    use super::*;
    use crate::{directory::*, id::*};

    #[derive(Debug)]
    pub struct DirectoryBuild {
        dir: Directory,
    }

    impl DirectoryBuild {
        pub fn project_id(mut self, id: RowId) -> Self {
            self.dir.project_id = id;
            self
        }
        pub fn event_id(mut self, id: RowId) -> Self {
            self.dir.event_id = id;
            self
        }
        pub fn parent_id(mut self, id: RowId) -> Self {
            self.dir.parent_id = id;
            self
        }
        pub fn map_id(mut self, id: RowId) -> Self {
            self.dir.map_id = id;
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.dir.name = name.into();
            self
        }
        pub fn finish(self) -> Directory {
            self.dir
        }
    }

    impl Builder for Directory {
        type Build = DirectoryBuild;
        fn build() -> Self::Build {
            DirectoryBuild {
                dir: Directory::default(),
            }
        }
    }

    #[derive(Debug)]
    pub struct DirectoryEntryBuild {
        entry: DirectoryEntry,
    }

    impl DirectoryEntryBuild {
        pub fn directory_id(mut self, id: RowId) -> Self {
            self.entry.directory_id = id;
            self
        }
        pub fn event_id(mut self, id: RowId) -> Self {
            self.entry.event_id = id;
            self
        }
        pub fn parent_entry_id(mut self, id: RowId) -> Self {
            self.entry.parent_entry_id = id;
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.entry.title = title.into();
            self
        }
        pub fn finish(self) -> DirectoryEntry {
            self.entry
        }
    }

    impl Builder for DirectoryEntry {
        type Build = DirectoryEntryBuild;
        fn build() -> Self::Build {
            DirectoryEntryBuild {
                entry: DirectoryEntry::default(),
            }
        }
    }

    #[test]
    fn root_directories() {
        assert!(Directory::default().is_root());
        assert!(!Directory::build().parent_id(3).finish().is_root());
        assert!(DirectoryEntry::build().title("x").finish().is_root());
        assert!(!DirectoryEntry::build().parent_entry_id(1).finish().is_root());
    }
}

pub mod guest_builder {

    use super::*;
    use crate::{guest::*, id::*};

    #[derive(Debug)]
    pub struct GuestBuild {
        guest: Guest,
    }

    impl GuestBuild {
        pub fn event_id(mut self, id: RowId) -> Self {
            self.guest.event_id = id;
            self
        }
        pub fn first_name(mut self, x: &str) -> Self {
            self.guest.first_name = x.into();
            self
        }
        pub fn last_name(mut self, x: Option<&str>) -> Self {
            self.guest.last_name = x.map(Into::into);
            self
        }
        pub fn email(mut self, x: &str) -> Self {
            self.guest.email = x.into();
            self
        }
        pub fn token(mut self, x: &str) -> Self {
            self.guest.token = x.into();
            self
        }
        pub fn finish(self) -> Guest {
            self.guest
        }
    }

    impl Builder for Guest {
        type Build = GuestBuild;
        fn build() -> Self::Build {
            GuestBuild {
                guest: Guest::default(),
            }
        }
    }
}
