//! Errors surfaced by the service layer to routes and the bot.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller supplied malformed, missing or out-of-range input.
    #[error("{0}")]
    InvalidArgument(String),

    /// The requested carer does not exist.
    #[error("{0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound("Опекун не найден".to_string()),
            other => ServiceError::Repository(other),
        }
    }
}
