//! Error conversion glue between the domain and the persistence layer.
//!
//! The domain layer must not depend on repository error types, so the
//! conversion from [`TypeConstraintError`] lives here. Services map domain
//! errors to user-facing messages themselves.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}
