//! Domain aggregates exposed by the carer service layer.

pub mod carer;
pub mod types;
