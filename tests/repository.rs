use diesel::prelude::*;
use shelter_carer::domain::carer::NewCarer;
use shelter_carer::domain::types::{AgreementNumber, CarerId, FullName, PhoneNumber};
use shelter_carer::repository::errors::RepositoryError;
use shelter_carer::repository::{CarerReader, CarerWriter, DieselRepository};
use shelter_carer::schema::carers;

mod common;

fn new_carer(full_name: &str, age: i32, phone_number: &str) -> NewCarer {
    NewCarer::new(None, full_name, age, phone_number, 2026).unwrap()
}

#[test]
fn test_carer_repository_crud() {
    let test_db = common::TestDb::new("test_carer_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let ivanov = repo
        .save_carer(&new_carer("Иванов Иван Иванович", 30, "+7(999)1234567"))
        .unwrap();
    let petrov = repo
        .save_carer(&new_carer("Петров Пётр", 45, "+7(999)7654321"))
        .unwrap();

    assert!(ivanov.id.get() > 0);
    assert_ne!(ivanov.id, petrov.id);
    assert_eq!(ivanov.birth_year, 1996);

    let found = repo.get_carer_by_id(ivanov.id).unwrap().unwrap();
    assert_eq!(found, ivanov);

    let all = repo.list_carers().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, ivanov.id);
    assert_eq!(all[1].id, petrov.id);

    repo.delete_carer(ivanov.id).unwrap();
    assert!(repo.get_carer_by_id(ivanov.id).unwrap().is_none());
    assert_eq!(repo.list_carers().unwrap().len(), 1);
}

#[test]
fn test_save_with_id_overwrites_row() {
    let test_db = common::TestDb::new("test_save_with_id_overwrites_row.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let original = repo
        .save_carer(&new_carer("Иванов Иван Иванович", 30, "+7(999)1234567"))
        .unwrap();

    let mut conn = test_db.pool().get().unwrap();
    diesel::update(carers::table.find(original.id.get()))
        .set(carers::agreement_number.eq("A-100"))
        .execute(&mut conn)
        .unwrap();

    let edited = NewCarer::new(
        Some(original.id),
        "Иванов Иван Петрович",
        31,
        "+7(999)0000000",
        2026,
    )
    .unwrap();
    let saved = repo.save_carer(&edited).unwrap();

    assert_eq!(saved.id, original.id);
    assert_eq!(saved.full_name.as_str(), "Иванов Иван Петрович");
    assert_eq!(saved.birth_year, 1995);
    assert_eq!(saved.phone_number.as_str(), "+7(999)0000000");
    assert_eq!(saved.agreement_number.as_deref(), Some("A-100"));
    assert_eq!(repo.list_carers().unwrap().len(), 1);
}

#[test]
fn test_save_with_unknown_id_inserts_row() {
    let test_db = common::TestDb::new("test_save_with_unknown_id_inserts_row.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let id = CarerId::new(77).unwrap();
    let carer = NewCarer::new(Some(id), "Сидоров Сидор", 50, "+7(999)5555555", 2026).unwrap();
    let saved = repo.save_carer(&carer).unwrap();

    assert_eq!(saved.id, id);
    assert!(repo.get_carer_by_id(id).unwrap().is_some());
}

#[test]
fn test_lookups_by_phone_agreement_and_name() {
    let test_db = common::TestDb::new("test_lookups_by_phone_agreement_and_name.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let carer = repo
        .save_carer(&new_carer("Иванов Иван Иванович", 30, "+7(999)1234567"))
        .unwrap();

    let mut conn = test_db.pool().get().unwrap();
    diesel::update(carers::table.find(carer.id.get()))
        .set(carers::agreement_number.eq("A-1"))
        .execute(&mut conn)
        .unwrap();

    let by_phone = repo
        .get_carer_by_phone_number(&PhoneNumber::new("+7(999)1234567").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(by_phone.id, carer.id);

    let by_agreement = repo
        .get_carer_by_agreement_number(&AgreementNumber::new("A-1").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(by_agreement.id, carer.id);

    assert!(
        repo.get_carer_by_agreement_number(&AgreementNumber::new("A-2").unwrap())
            .unwrap()
            .is_none()
    );
    assert!(
        repo.get_carer_by_phone_number(&PhoneNumber::new("+7(999)0000000").unwrap())
            .unwrap()
            .is_none()
    );

    let name = FullName::new("Иванов Иван Иванович").unwrap();
    assert!(
        repo.carer_exists_by_full_name_and_phone_number(
            &name,
            &PhoneNumber::new("+7(999)1234567").unwrap()
        )
        .unwrap()
    );
    assert!(
        !repo
            .carer_exists_by_full_name_and_phone_number(
                &name,
                &PhoneNumber::new("+7(999)7654321").unwrap()
            )
            .unwrap()
    );
}

#[test]
fn test_delete_missing_carer_reports_not_found() {
    let test_db = common::TestDb::new("test_delete_missing_carer_reports_not_found.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let result = repo.delete_carer(CarerId::new(404).unwrap());
    assert!(matches!(result, Err(RepositoryError::NotFound)));
}
