//! Database models backing the carer repository.

pub mod carer;
#[cfg(feature = "server")]
pub mod config;
