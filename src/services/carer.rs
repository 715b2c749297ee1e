//! Carer lifecycle: validation, mapping and persistence.

use log::{error, info};
use mockable::Clock;
use validator::Validate;

use crate::domain::carer::{Carer, NewCarer, current_year};
use crate::domain::types::{AgreementNumber, CarerId, FullName, PhoneNumber};
use crate::dto::carer::{CarerRecord, map_to_new_carer};
use crate::repository::errors::RepositoryError;
use crate::repository::{CarerReader, CarerWriter};
use crate::services::{ServiceError, ServiceResult};

pub const CARER_REQUIRED: &str = "Требуется добавить опекуна";
pub const CARER_DETAILS_REQUIRED: &str =
    "Требуется указать корректные данные: имя опекуна, телефонный номер опекуна";
pub const INVALID_CARER_ID: &str = "Требуется указать корректный id опекуна";
pub const INVALID_PHONE_NUMBER: &str =
    "Требуется указать телефонный номер в формате +7(999)1234567";
pub const INVALID_AGREEMENT_NUMBER: &str = "Требуется указать номер договора опекуна";

fn parse_carer_id(id: i64, action: &str) -> ServiceResult<CarerId> {
    CarerId::new(id).map_err(|_| {
        error!("Input id = {id} for {action} carer is incorrect");
        ServiceError::InvalidArgument(INVALID_CARER_ID.to_string())
    })
}

fn validate_record<C>(record: &CarerRecord, clock: &C) -> ServiceResult<NewCarer>
where
    C: Clock + ?Sized,
{
    if let Err(err) = record.validate() {
        error!("Carer record failed validation: {err}");
        return Err(ServiceError::InvalidArgument(
            CARER_DETAILS_REQUIRED.to_string(),
        ));
    }

    map_to_new_carer(record, clock).map_err(|err| {
        error!("Carer record is incorrect: {err}");
        ServiceError::InvalidArgument(CARER_DETAILS_REQUIRED.to_string())
    })
}

/// Stores a new carer received through the HTTP API.
///
/// The record id is ignored: adding always creates a new row.
pub fn add_carer<R, C>(repo: &R, clock: &C, record: &CarerRecord) -> ServiceResult<Carer>
where
    R: CarerWriter + ?Sized,
    C: Clock + ?Sized,
{
    let mut new_carer = validate_record(record, clock)?;
    new_carer.id = None;

    info!("Was invoked method for adding carer");
    Ok(repo.save_carer(&new_carer)?)
}

/// Stores a carer registered through the telegram bot dialogue.
pub fn add_carer_from_bot<R, C>(
    repo: &R,
    clock: &C,
    full_name: &str,
    age: i32,
    phone_number: &str,
) -> ServiceResult<Carer>
where
    R: CarerWriter + ?Sized,
    C: Clock + ?Sized,
{
    let new_carer = NewCarer::new(None, full_name, age, phone_number, current_year(clock))
        .map_err(|err| {
            error!("Carer's full name, age or phone number is incorrect: {err}");
            ServiceError::InvalidArgument(CARER_DETAILS_REQUIRED.to_string())
        })?;

    info!("Was invoked method for adding carer from Telegram bot");
    Ok(repo.save_carer(&new_carer)?)
}

/// Loads a carer by its identifier.
pub fn find_carer<R>(repo: &R, id: i64) -> ServiceResult<Carer>
where
    R: CarerReader + ?Sized,
{
    let carer_id = parse_carer_id(id, "getting")?;

    info!("Was invoked method to find carer");
    repo.get_carer_by_id(carer_id)?
        .ok_or_else(|| ServiceError::NotFound(format!("Опекун с id = {id} не найден")))
}

/// Loads the carer bound to an adoption agreement.
pub fn find_carer_by_agreement_number<R>(repo: &R, agreement_number: &str) -> ServiceResult<Carer>
where
    R: CarerReader + ?Sized,
{
    let agreement_number = AgreementNumber::new(agreement_number).map_err(|_| {
        error!("Agreement number for getting carer is empty");
        ServiceError::InvalidArgument(INVALID_AGREEMENT_NUMBER.to_string())
    })?;

    info!("Was invoked method to find carer by agreement number");
    repo.get_carer_by_agreement_number(&agreement_number)?
        .ok_or_else(|| {
            ServiceError::NotFound(format!(
                "Опекун с номером договора {agreement_number} не найден"
            ))
        })
}

/// Re-saves the whole carer from the record.
///
/// A record with a stored id overwrites that row; id `0` inserts a new one.
pub fn edit_carer<R, C>(repo: &R, clock: &C, record: &CarerRecord) -> ServiceResult<Carer>
where
    R: CarerWriter + ?Sized,
    C: Clock + ?Sized,
{
    parse_carer_id(record.id, "editing")?;
    let new_carer = validate_record(record, clock)?;

    info!("Was invoked method to edit carer");
    Ok(repo.save_carer(&new_carer)?)
}

/// Removes a carer by its identifier.
pub fn delete_carer<R>(repo: &R, id: i64) -> ServiceResult<()>
where
    R: CarerWriter + ?Sized,
{
    let carer_id = parse_carer_id(id, "deleting")?;

    info!("Was invoked method to delete carer");
    repo.delete_carer(carer_id).map_err(|err| match err {
        RepositoryError::NotFound => ServiceError::NotFound(format!("Опекун с id = {id} не найден")),
        other => ServiceError::from(other),
    })
}

/// Advisory duplicate check on the (full name, phone number) pair.
pub fn exists_carer_by_full_name_and_phone_number<R>(
    repo: &R,
    full_name: &str,
    phone_number: &str,
) -> ServiceResult<bool>
where
    R: CarerReader + ?Sized,
{
    // Stored carers always have both values, so blanks cannot match.
    let (Ok(full_name), Ok(phone_number)) = (FullName::new(full_name), PhoneNumber::new(phone_number))
    else {
        return Ok(false);
    };

    Ok(repo.carer_exists_by_full_name_and_phone_number(&full_name, &phone_number)?)
}

/// Loads the carer with the given phone number, which must look like `+7(999)1234567`.
pub fn find_carer_by_phone_number<R>(repo: &R, phone_number: &str) -> ServiceResult<Carer>
where
    R: CarerReader + ?Sized,
{
    let phone_number = PhoneNumber::new_strict(phone_number).map_err(|err| {
        error!("Phone number {phone_number:?} for getting carer is incorrect: {err}");
        ServiceError::InvalidArgument(INVALID_PHONE_NUMBER.to_string())
    })?;

    info!("Was invoked method to find carer by phone number");
    repo.get_carer_by_phone_number(&phone_number)?
        .ok_or_else(|| {
            ServiceError::NotFound(format!(
                "Опекун с телефонным номером {phone_number} не найден"
            ))
        })
}

/// Lists every stored carer ordered by id.
pub fn find_all<R>(repo: &R) -> ServiceResult<Vec<Carer>>
where
    R: CarerReader + ?Sized,
{
    Ok(repo.list_carers()?)
}
