//! Throwaway SQLite databases laid out like the climate store.

use std::path::PathBuf;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection, Executor};
use tempfile::TempDir;

use query_engine_metadata::metadata::{Measurement, Station};

/// DDL of the climate store.
pub const HAWAII_SCHEMA: &str = include_str!("hawaii_schema.sql");

const DATABASE_FILENAME: &str = "hawaii.sqlite";

/// A database file in a temporary directory. Removed on drop.
pub struct FixtureDatabase {
    _dir: TempDir,
    path: PathBuf,
}

impl FixtureDatabase {
    /// Create a database by running the given DDL, one statement at a time.
    pub async fn from_schema(schema: &str) -> FixtureDatabase {
        let dir = tempfile::tempdir().expect("tempfile::tempdir");
        let path = dir.path().join(DATABASE_FILENAME);

        let mut connection = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .foreign_keys(false)
            .connect()
            .await
            .expect("create fixture database");

        for statement in schema.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            connection
                .execute(statement)
                .await
                .unwrap_or_else(|err| panic!("fixture DDL failed: {err}\n{statement}"));
        }
        connection.close().await.expect("close fixture database");

        FixtureDatabase { _dir: dir, path }
    }

    /// A database with both tables and no rows.
    pub async fn empty() -> FixtureDatabase {
        Self::from_schema(HAWAII_SCHEMA).await
    }

    pub fn connection_uri(&self) -> String {
        format!("sqlite://{}", self.path.display())
    }

    /// `measurement.station` references a column that is not a key, as in the
    /// real store, so foreign key enforcement has to stay off for inserts.
    async fn connect(&self) -> SqliteConnection {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .foreign_keys(false)
            .connect()
            .await
            .expect("connect to fixture database")
    }

    pub async fn insert_stations(&self, stations: &[Station]) {
        let mut connection = self.connect().await;
        for station in stations {
            sqlx::query(
                "INSERT INTO station (id, station, name, latitude, longitude, elevation) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )
            .bind(station.id)
            .bind(&station.station)
            .bind(&station.name)
            .bind(station.latitude)
            .bind(station.longitude)
            .bind(station.elevation)
            .execute(&mut connection)
            .await
            .expect("insert station");
        }
        connection.close().await.expect("close fixture database");
    }

    pub async fn insert_measurements(&self, measurements: &[Measurement]) {
        let mut connection = self.connect().await;
        for measurement in measurements {
            sqlx::query(
                "INSERT INTO measurement (id, station, date, prcp, tobs) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .bind(measurement.id)
            .bind(&measurement.station)
            .bind(&measurement.date)
            .bind(measurement.prcp)
            .bind(measurement.tobs)
            .execute(&mut connection)
            .await
            .expect("insert measurement");
        }
        connection.close().await.expect("close fixture database");
    }
}

/// Collects stations and measurements, then writes them to a fresh database.
///
/// Ids are assigned in insertion order, so rows come back from a table scan in the
/// order they were added.
#[derive(Default)]
pub struct FixtureBuilder {
    stations: Vec<Station>,
    measurements: Vec<Measurement>,
}

impl FixtureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn station(mut self, code: &str) -> Self {
        let id = i64::try_from(self.stations.len()).expect("station count") + 1;
        self.stations.push(Station {
            id,
            station: code.to_string(),
            name: format!("{code}, HI US"),
            latitude: 21.0,
            longitude: -157.8,
            elevation: 3.0,
        });
        self
    }

    #[must_use]
    pub fn measurement(mut self, station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Self {
        let id = i64::try_from(self.measurements.len()).expect("measurement count") + 1;
        self.measurements.push(Measurement {
            id,
            station: station.to_string(),
            date: date.to_string(),
            prcp,
            tobs,
        });
        self
    }

    pub async fn build(self) -> FixtureDatabase {
        let database = FixtureDatabase::empty().await;
        database.insert_stations(&self.stations).await;
        database.insert_measurements(&self.measurements).await;
        database
    }
}
