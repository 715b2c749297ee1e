//! Persistence boundary for carer records.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::carer::{Carer, NewCarer};
use crate::domain::types::{AgreementNumber, CarerId, FullName, PhoneNumber};
use crate::repository::errors::RepositoryResult;

pub mod carer;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed repository sharing an r2d2 SQLite pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait CarerReader {
    fn get_carer_by_id(&self, id: CarerId) -> RepositoryResult<Option<Carer>>;
    fn get_carer_by_agreement_number(
        &self,
        agreement_number: &AgreementNumber,
    ) -> RepositoryResult<Option<Carer>>;
    fn get_carer_by_phone_number(&self, phone_number: &PhoneNumber)
    -> RepositoryResult<Option<Carer>>;
    fn carer_exists_by_full_name_and_phone_number(
        &self,
        full_name: &FullName,
        phone_number: &PhoneNumber,
    ) -> RepositoryResult<bool>;
    fn list_carers(&self) -> RepositoryResult<Vec<Carer>>;
}

pub trait CarerWriter {
    /// Inserts a new row, or overwrites the row with `new_carer.id` when set.
    fn save_carer(&self, new_carer: &NewCarer) -> RepositoryResult<Carer>;
    /// Removes the row; fails with `NotFound` when nothing was deleted.
    fn delete_carer(&self, id: CarerId) -> RepositoryResult<()>;
}
