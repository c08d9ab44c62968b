//! Rows decoded from the store and returned as JSON.
use serde::Serialize;
use sqlx::FromRow;

/// One day of precipitation at one station.
#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Precipitation {
    pub date: String,
    pub prcp: Option<f64>,
}

/// Temperature statistics over a date range. All three are null when the range is
/// empty.
#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct TemperatureStats {
    #[serde(rename = "TMIN")]
    #[sqlx(rename = "TMIN")]
    pub min: Option<f64>,
    #[serde(rename = "TMAX")]
    #[sqlx(rename = "TMAX")]
    pub max: Option<f64>,
    #[serde(rename = "TAVG")]
    #[sqlx(rename = "TAVG")]
    pub avg: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, FromRow)]
pub(crate) struct LatestDate {
    #[sqlx(rename = "max_date")]
    pub date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, FromRow)]
pub(crate) struct ActiveStation {
    pub station: String,
    pub count: i64,
}

