use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The event does not exist")]
    EventDoesNotExist,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
