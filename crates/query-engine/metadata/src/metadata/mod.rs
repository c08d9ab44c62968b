//! Metadata information regarding the database and tracked information.

pub mod database;
pub mod tables;

// re-export without modules
pub use database::*;
pub use tables::{Measurement, Station, MEASUREMENT_TABLE, STATION_TABLE};

/// Every table the service reads from.
pub const TABLES: [&TableInfo; 2] = [&STATION_TABLE, &MEASUREMENT_TABLE];
