mod clone_event;
mod error;
mod record_install;

#[cfg(test)]
pub mod tests;

pub use self::{clone_event::*, error::Error, record_install::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
