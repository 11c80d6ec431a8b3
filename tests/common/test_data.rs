//! Test data generation utilities.
//!
//! This module builds small SQLite stores shaped like the Hawaii climate
//! dataset, with known contents for end-to-end assertions.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, sqlx::Error>;

/// (station, name, latitude, longitude, elevation)
pub const STATIONS: &[(&str, &str, f64, f64, f64)] = &[
    ("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
    ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    ("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
];

/// (station, date, prcp, tobs)
///
/// USC00519281 has the most rows and its latest reading is 2017-08-18,
/// five days before the store-wide latest date of 2017-08-23.
pub const MEASUREMENTS: &[(&str, &str, Option<f64>, Option<f64>)] = &[
    ("USC00519397", "2016-08-22", Some(0.4), Some(78.0)),
    ("USC00519397", "2016-08-23", Some(0.0), Some(81.0)),
    ("USC00519397", "2017-01-01", Some(0.0), Some(62.0)),
    ("USC00519397", "2017-08-23", Some(0.0), Some(81.0)),
    ("USC00513117", "2016-08-23", Some(0.15), Some(76.0)),
    ("USC00513117", "2017-08-23", Some(0.08), Some(82.0)),
    ("USC00519281", "2016-08-17", Some(0.01), Some(76.0)),
    ("USC00519281", "2016-08-18", Some(0.0), Some(80.0)),
    ("USC00519281", "2017-01-01", None, Some(72.0)),
    ("USC00519281", "2017-04-30", Some(1.2), Some(60.0)),
    ("USC00519281", "2017-08-18", Some(0.06), Some(79.0)),
];

/// Creates a store file at `dir/hawaii.sqlite` filled with [`STATIONS`] and [`MEASUREMENTS`].
pub async fn create_hawaii_store(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("hawaii.sqlite");
    let options = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        )
        "#,
    )
    .execute(&pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        )
        "#,
    )
    .execute(&pool)
    .await?;

    for (station, name, latitude, longitude, elevation) in STATIONS {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(*station)
        .bind(*name)
        .bind(*latitude)
        .bind(*longitude)
        .bind(*elevation)
        .execute(&pool)
        .await?;
    }

    for (station, date, prcp, tobs) in MEASUREMENTS {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(*station)
            .bind(*date)
            .bind(*prcp)
            .bind(*tobs)
            .execute(&pool)
            .await?;
    }

    pool.close().await;
    Ok(path)
}
