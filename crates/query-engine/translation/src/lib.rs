//! Translate the climate API operations into execution plans.

pub mod date;
pub mod error;
pub mod query;

pub use error::Error;
