//! HTTP bindings for the carer service.

use actix_web::error::InternalError;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use log::error;

use crate::services::ServiceError;
use crate::services::carer::{CARER_REQUIRED, INVALID_CARER_ID};

pub mod carer;

/// Plain-text response carrying a user-facing message.
fn text_response(mut builder: actix_web::HttpResponseBuilder, message: String) -> HttpResponse {
    builder.content_type(ContentType::plaintext()).body(message)
}

/// Translates a service failure into the matching HTTP status.
pub fn service_error_response(err: ServiceError, context: &str) -> HttpResponse {
    match err {
        ServiceError::InvalidArgument(message) => {
            text_response(HttpResponse::BadRequest(), message)
        }
        ServiceError::NotFound(message) => text_response(HttpResponse::NotFound(), message),
        err => {
            error!("{context}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// JSON extractor settings: a missing or malformed body is a bad request.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        error!("Failed to parse carer payload: {err}");
        let response = text_response(HttpResponse::BadRequest(), CARER_REQUIRED.to_string());
        InternalError::from_response(err, response).into()
    })
}

/// Path extractor settings: a non-numeric id is a bad request.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        error!("Failed to parse carer path: {err}");
        let response = text_response(HttpResponse::BadRequest(), INVALID_CARER_ID.to_string());
        InternalError::from_response(err, response).into()
    })
}
