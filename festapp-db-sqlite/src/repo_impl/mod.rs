use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use festapp_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod directory;
mod event;
mod guest;
mod hunt;
mod install;
mod lookup;
mod news;
mod pindrop;
mod poll;
mod project;
mod schedule;
mod shop;
mod stats;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

define_sql_function! {
    /// Row id of the most recent successful insert on the connection.
    fn last_insert_rowid() -> BigInt;
}

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_last_insert_rowid(conn: &mut SqliteConnection) -> Result<RowId> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)
}

/// Fails if an update did not hit a row.
fn expect_updated(count: usize) -> Result<()> {
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}
