use chrono::Datelike;
use mockable::Clock;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    AgreementNumber, CarerId, FullName, PhoneNumber, TypeConstraintError, validate_age,
};

/// Calendar year used to turn ages into birth years.
pub fn current_year<C>(clock: &C) -> i32
where
    C: Clock + ?Sized,
{
    clock.local().year()
}

/// Carer record as stored in the database.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Carer {
    pub id: CarerId,
    pub full_name: FullName,
    pub birth_year: i32,
    pub phone_number: PhoneNumber,
    pub agreement_number: Option<AgreementNumber>,
}

/// Validated input for creating or re-saving a carer.
///
/// Both the HTTP mapper and the telegram bot entry point build this type, so
/// every write path goes through the same checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCarer {
    /// Existing row to overwrite; `None` inserts a new row.
    pub id: Option<CarerId>,
    pub full_name: FullName,
    pub birth_year: i32,
    pub phone_number: PhoneNumber,
}

impl NewCarer {
    /// Validates raw values and derives the birth year from `current_year`.
    pub fn new(
        id: Option<CarerId>,
        full_name: impl Into<String>,
        age: i32,
        phone_number: impl Into<String>,
        current_year: i32,
    ) -> Result<Self, TypeConstraintError> {
        let full_name = FullName::new(full_name)?;
        let phone_number = PhoneNumber::new(phone_number)?;
        let age = validate_age(age)?;

        Ok(Self {
            id: id.filter(|id| id.is_assigned()),
            full_name,
            birth_year: current_year - age,
            phone_number,
        })
    }
}
