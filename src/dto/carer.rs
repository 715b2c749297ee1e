//! Wire shape of a carer and its mapping to the stored entity.
//!
//! The API splits the name into three parts and talks about age, while the
//! store keeps one joined full name and a birth year. Joining is lossy when a
//! name part contains spaces: reading back splits on the first two spaces,
//! so everything after the second space ends up in the patronymic.

use mockable::Clock;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::carer::{Carer, NewCarer, current_year};
use crate::domain::types::{CarerId, TypeConstraintError};

#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Carer as sent and received by the `/carer` endpoints.
pub struct CarerRecord {
    /// Stored identifier; `0` for records that were never saved.
    #[serde(default)]
    pub id: i64,
    #[validate(length(min = 1))]
    pub second_name: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    /// May be empty for carers without a patronymic.
    #[serde(default)]
    pub patronymic: String,
    /// Age in full years.
    #[validate(range(min = 0, max = 150))]
    pub age: i32,
    #[validate(length(min = 1))]
    pub phone_number: String,
}

/// Joins the name parts as `second first patronymic`.
fn join_full_name(record: &CarerRecord) -> Result<String, TypeConstraintError> {
    let second_name = record.second_name.trim();
    let first_name = record.first_name.trim();
    if second_name.is_empty() || first_name.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }

    let patronymic = record.patronymic.trim();
    if patronymic.is_empty() {
        Ok(format!("{second_name} {first_name}"))
    } else {
        Ok(format!("{second_name} {first_name} {patronymic}"))
    }
}

/// Builds the validated entity input from a wire record.
///
/// A positive `id` is carried over so that saving the result overwrites the
/// existing row.
pub fn map_to_new_carer<C>(record: &CarerRecord, clock: &C) -> Result<NewCarer, TypeConstraintError>
where
    C: Clock + ?Sized,
{
    let id = CarerId::new(record.id)?;
    let full_name = join_full_name(record)?;

    NewCarer::new(
        Some(id),
        full_name,
        record.age,
        record.phone_number.as_str(),
        current_year(clock),
    )
}

/// Converts a stored carer back to its wire shape.
pub fn map_to_carer_record<C>(carer: &Carer, clock: &C) -> CarerRecord
where
    C: Clock + ?Sized,
{
    let mut parts = carer.full_name.splitn(3, ' ');
    let second_name = parts.next().unwrap_or_default().to_string();
    let first_name = parts.next().unwrap_or_default().to_string();
    let patronymic = parts.next().unwrap_or_default().to_string();

    CarerRecord {
        id: carer.id.get(),
        second_name,
        first_name,
        patronymic,
        age: current_year(clock) - carer.birth_year,
        phone_number: carer.phone_number.as_str().to_string(),
    }
}
