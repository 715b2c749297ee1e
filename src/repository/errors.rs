//! Errors raised by the persistence layer.
//!
//! Only failures the `carers` table can produce over SQLite get their own
//! variant; everything else Diesel reports is kept as a database error.

use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    /// A stored row no longer satisfies the domain invariants.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Duplicate primary key or a missing required column.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(
                kind @ (DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::NotNullViolation),
                info,
            ) => RepositoryError::ConstraintViolation(format!("{kind:?}: {}", info.message())),
            DieselError::DatabaseError(_, info) => {
                RepositoryError::DatabaseError(info.message().to_string())
            }
            DieselError::DeserializationError(e) => {
                RepositoryError::ValidationError(format!("Unreadable carer row: {e}"))
            }
            other => RepositoryError::DatabaseError(other.to_string()),
        }
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}
