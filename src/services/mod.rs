//! Business rules for the carer endpoints and the telegram bot.

pub mod carer;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
