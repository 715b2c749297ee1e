//! `/carer` endpoints.

use actix_web::{HttpResponse, Responder, Scope, delete, get, post, put, web};

use crate::SharedClock;
use crate::dto::carer::{CarerRecord, map_to_carer_record};
use crate::repository::DieselRepository;
use crate::routes::{json_config, path_config, service_error_response};
use crate::services::carer as carer_service;

/// Route group mounted at `/carer`.
pub fn carer_scope() -> Scope {
    web::scope("/carer")
        .app_data(json_config())
        .app_data(path_config())
        .service(list_carers)
        .service(add_carer)
        .service(edit_carer)
        .service(find_carer_by_agreement_number)
        .service(find_carer_by_phone_number)
        .service(find_carer)
        .service(delete_carer)
}

#[get("")]
pub async fn list_carers(
    repo: web::Data<DieselRepository>,
    clock: web::Data<SharedClock>,
) -> impl Responder {
    match carer_service::find_all(repo.get_ref()) {
        Ok(carers) => {
            let records = carers
                .iter()
                .map(|carer| map_to_carer_record(carer, clock.get_ref()))
                .collect::<Vec<_>>();
            HttpResponse::Ok().json(records)
        }
        Err(err) => service_error_response(err, "Failed to list carers"),
    }
}

#[post("")]
pub async fn add_carer(
    repo: web::Data<DieselRepository>,
    clock: web::Data<SharedClock>,
    web::Json(record): web::Json<CarerRecord>,
) -> impl Responder {
    match carer_service::add_carer(repo.get_ref(), clock.get_ref(), &record) {
        Ok(carer) => HttpResponse::Ok().json(map_to_carer_record(&carer, clock.get_ref())),
        Err(err) => service_error_response(err, "Failed to add carer"),
    }
}

#[get("/{id}")]
pub async fn find_carer(
    id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
    clock: web::Data<SharedClock>,
) -> impl Responder {
    match carer_service::find_carer(repo.get_ref(), id.into_inner()) {
        Ok(carer) => HttpResponse::Ok().json(map_to_carer_record(&carer, clock.get_ref())),
        Err(err) => service_error_response(err, "Failed to get carer"),
    }
}

#[get("/agreement/{agreement_number}")]
pub async fn find_carer_by_agreement_number(
    agreement_number: web::Path<String>,
    repo: web::Data<DieselRepository>,
    clock: web::Data<SharedClock>,
) -> impl Responder {
    match carer_service::find_carer_by_agreement_number(repo.get_ref(), &agreement_number) {
        Ok(carer) => HttpResponse::Ok().json(map_to_carer_record(&carer, clock.get_ref())),
        Err(err) => service_error_response(err, "Failed to get carer by agreement number"),
    }
}

#[get("/phone/{phone_number}")]
pub async fn find_carer_by_phone_number(
    phone_number: web::Path<String>,
    repo: web::Data<DieselRepository>,
    clock: web::Data<SharedClock>,
) -> impl Responder {
    match carer_service::find_carer_by_phone_number(repo.get_ref(), &phone_number) {
        Ok(carer) => HttpResponse::Ok().json(map_to_carer_record(&carer, clock.get_ref())),
        Err(err) => service_error_response(err, "Failed to get carer by phone number"),
    }
}

#[put("")]
pub async fn edit_carer(
    repo: web::Data<DieselRepository>,
    clock: web::Data<SharedClock>,
    web::Json(record): web::Json<CarerRecord>,
) -> impl Responder {
    match carer_service::edit_carer(repo.get_ref(), clock.get_ref(), &record) {
        Ok(carer) => HttpResponse::Ok().json(map_to_carer_record(&carer, clock.get_ref())),
        Err(err) => service_error_response(err, "Failed to edit carer"),
    }
}

#[delete("/{id}")]
pub async fn delete_carer(
    id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match carer_service::delete_carer(repo.get_ref(), id.into_inner()) {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => service_error_response(err, "Failed to delete carer"),
    }
}
