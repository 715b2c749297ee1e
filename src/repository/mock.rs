//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::carer::{Carer, NewCarer};
use crate::domain::types::{AgreementNumber, CarerId, FullName, PhoneNumber};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CarerReader, CarerWriter};

mock! {
    pub Repository {}

    impl CarerReader for Repository {
        fn get_carer_by_id(&self, id: CarerId) -> RepositoryResult<Option<Carer>>;
        fn get_carer_by_agreement_number(
            &self,
            agreement_number: &AgreementNumber,
        ) -> RepositoryResult<Option<Carer>>;
        fn get_carer_by_phone_number(
            &self,
            phone_number: &PhoneNumber,
        ) -> RepositoryResult<Option<Carer>>;
        fn carer_exists_by_full_name_and_phone_number(
            &self,
            full_name: &FullName,
            phone_number: &PhoneNumber,
        ) -> RepositoryResult<bool>;
        fn list_carers(&self) -> RepositoryResult<Vec<Carer>>;
    }

    impl CarerWriter for Repository {
        fn save_carer(&self, new_carer: &NewCarer) -> RepositoryResult<Carer>;
        fn delete_carer(&self, id: CarerId) -> RepositoryResult<()>;
    }
}
