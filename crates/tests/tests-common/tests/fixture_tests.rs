//! Fixtures hold exactly the rows they were built with.

use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};

use tests_common::FixtureBuilder;

#[tokio::test]
async fn measurements_are_written_with_a_shared_station_code() {
    let database = FixtureBuilder::new()
        .station("USC00519397")
        .station("USC00519397")
        .measurement("USC00519397", "2017-08-22", Some(0.0), 80.0)
        .measurement("USC00519397", "2017-08-23", None, 81.0)
        .build()
        .await;

    let mut connection = SqliteConnectOptions::from_str(&database.connection_uri())
        .unwrap()
        .read_only(true)
        .connect()
        .await
        .unwrap();
    let rows: Vec<(i64, String, Option<f64>, f64)> =
        sqlx::query_as("SELECT id, date, prcp, tobs FROM measurement ORDER BY id")
            .fetch_all(&mut connection)
            .await
            .unwrap();
    let stations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM station")
        .fetch_one(&mut connection)
        .await
        .unwrap();
    connection.close().await.unwrap();

    assert_eq!(
        rows,
        vec![
            (1, "2017-08-22".to_string(), Some(0.0), 80.0),
            (2, "2017-08-23".to_string(), None, 81.0),
        ]
    );
    assert_eq!(stations, 2);
}
