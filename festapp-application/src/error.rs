use festapp_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

pub use festapp_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl AppError {
    /// The requested event, user or row does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Business(
                BError::Repo(RepoError::NotFound)
                    | BError::Parameter(
                        ParameterError::EventDoesNotExist
                            | ParameterError::UserDoesNotExist
                            | ParameterError::Repo(RepoError::NotFound)
                    )
            )
        )
    }
}
