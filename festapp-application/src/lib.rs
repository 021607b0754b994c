#[macro_use]
extern crate log;

mod clone_event;
mod record_install;

pub mod prelude {
    pub use super::{clone_event::*, record_install::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use festapp_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub mod sqlite {
    pub use festapp_db_sqlite::{run_embedded_database_migrations, Connections};
}
