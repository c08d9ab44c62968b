//! The two tables of the climate store and their record types.

use serde::{Deserialize, Serialize};

use super::database::{ColumnInfo, ScalarType, TableInfo};

/// Names of the `station` table and its columns.
pub mod station {
    pub const TABLE: &str = "station";
    pub const ID: &str = "id";
    /// The station code, e.g. `USC00519281`. Unique.
    pub const STATION: &str = "station";
    pub const NAME: &str = "name";
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const ELEVATION: &str = "elevation";
}

/// Names of the `measurement` table and its columns.
pub mod measurement {
    pub const TABLE: &str = "measurement";
    pub const ID: &str = "id";
    /// References `station.station`.
    pub const STATION: &str = "station";
    pub const DATE: &str = "date";
    pub const PRCP: &str = "prcp";
    pub const TOBS: &str = "tobs";
}

pub const STATION_TABLE: TableInfo = TableInfo {
    table_name: station::TABLE,
    columns: &[
        ColumnInfo {
            name: station::ID,
            r#type: ScalarType::Int,
        },
        ColumnInfo {
            name: station::STATION,
            r#type: ScalarType::String,
        },
        ColumnInfo {
            name: station::NAME,
            r#type: ScalarType::String,
        },
        ColumnInfo {
            name: station::LATITUDE,
            r#type: ScalarType::Float,
        },
        ColumnInfo {
            name: station::LONGITUDE,
            r#type: ScalarType::Float,
        },
        ColumnInfo {
            name: station::ELEVATION,
            r#type: ScalarType::Float,
        },
    ],
};

pub const MEASUREMENT_TABLE: TableInfo = TableInfo {
    table_name: measurement::TABLE,
    columns: &[
        ColumnInfo {
            name: measurement::ID,
            r#type: ScalarType::Int,
        },
        ColumnInfo {
            name: measurement::STATION,
            r#type: ScalarType::String,
        },
        ColumnInfo {
            name: measurement::DATE,
            r#type: ScalarType::String,
        },
        ColumnInfo {
            name: measurement::PRCP,
            r#type: ScalarType::Float,
        },
        ColumnInfo {
            name: measurement::TOBS,
            r#type: ScalarType::Float,
        },
    ],
};

/// A weather station. Reference data, never written by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// One day of observations at a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: i64,
    pub station: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: f64,
}
