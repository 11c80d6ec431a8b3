//! Read-only access to the climate store.
//!
//! The store is a pre-populated SQLite file with two tables, `station` and
//! `measurement`. Both record shapes are declared here against their known
//! column names; nothing is discovered from the schema at runtime.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::{ClimateError, Result};

/// Date format used by the `measurement.date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A fixed weather-observation location
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Station {
    /// Unique station identifier, e.g. `USC00519397`
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// One daily observation tied to a station
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Measurement {
    pub station: String,
    pub date: String,
    /// Precipitation amount
    pub prcp: Option<f64>,
    /// Observed temperature
    pub tobs: Option<f64>,
}

/// A single dated value pulled out of the measurement table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Observation {
    pub date: String,
    pub value: Option<f64>,
}

/// Temperature aggregates over a date range; all `None` when no rows match
#[derive(Debug, Clone, Copy, Default, PartialEq, FromRow)]
pub struct TemperatureStats {
    pub tmin: Option<f64>,
    pub tavg: Option<f64>,
    pub tmax: Option<f64>,
}

/// Row counts for both tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, FromRow)]
pub struct StoreCounts {
    pub stations: i64,
    pub measurements: i64,
}

/// Earliest and latest observation dates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct DateRange {
    pub first: Option<String>,
    pub last: Option<String>,
}

/// Handle to the climate store, cheap to clone
#[derive(Debug, Clone)]
pub struct ClimateStore {
    pool: SqlitePool,
}

impl ClimateStore {
    /// Open a read-only connection pool to the store described by `config`
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let path = &config.path;

        // SQLite would otherwise report a generic open failure
        if !path.exists() {
            return Err(ClimateError::Connection {
                message: format!("Store file not found: {}", path.display()),
            });
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| ClimateError::Connection {
                message: format!("Failed to open {}: {}", path.display(), e),
            })?;

        info!(
            path = %path.display(),
            max_connections = config.max_connections,
            "Opened climate store"
        );

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Latest observation date across all measurements
    pub async fn max_date(&self) -> Result<Option<String>> {
        let date = sqlx::query_scalar::<_, Option<String>>("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;
        Ok(date)
    }

    /// Latest observation date for a single station
    pub async fn max_date_for_station(&self, station: &str) -> Result<Option<String>> {
        let date = sqlx::query_scalar::<_, Option<String>>(
            "SELECT MAX(date) FROM measurement WHERE station = ?",
        )
        .bind(station)
        .fetch_one(&self.pool)
        .await?;
        Ok(date)
    }

    /// Every precipitation reading on or after `since`, in store order
    pub async fn precipitation_since(&self, since: &str) -> Result<Vec<Observation>> {
        let rows = sqlx::query_as::<_, Observation>(
            r#"
            SELECT date, prcp AS value
            FROM measurement
            WHERE date >= ?
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        debug!(since = since, rows = rows.len(), "Fetched precipitation");
        Ok(rows)
    }

    /// All station identifiers, in store order
    pub async fn all_stations(&self) -> Result<Vec<String>> {
        let stations = sqlx::query_scalar::<_, String>("SELECT station FROM station")
            .fetch_all(&self.pool)
            .await?;
        Ok(stations)
    }

    /// Full station records, in store order
    pub async fn station_details(&self) -> Result<Vec<Station>> {
        let stations = sqlx::query_as::<_, Station>(
            r#"
            SELECT station, name, latitude, longitude, elevation
            FROM station
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(stations)
    }

    /// The station with the most measurement rows.
    ///
    /// Ties are broken by whichever group the store returns first.
    pub async fn most_active_station(&self) -> Result<Option<String>> {
        let station = sqlx::query_scalar::<_, String>(
            r#"
            SELECT station
            FROM measurement
            GROUP BY station
            ORDER BY COUNT(station) DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(station)
    }

    /// Temperature readings for one station on or after `since`
    pub async fn temperatures_since(&self, station: &str, since: &str) -> Result<Vec<Observation>> {
        let rows = sqlx::query_as::<_, Observation>(
            r#"
            SELECT date, tobs AS value
            FROM measurement
            WHERE station = ? AND date >= ?
            "#,
        )
        .bind(station)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            station = station,
            since = since,
            rows = rows.len(),
            "Fetched temperatures"
        );
        Ok(rows)
    }

    /// MIN/AVG/MAX temperature for `from <= date [<= to]`.
    ///
    /// Neither bound is validated; a malformed date just narrows the match.
    pub async fn temperature_stats(&self, from: &str, to: Option<&str>) -> Result<TemperatureStats> {
        let stats = match to {
            Some(to) => {
                sqlx::query_as::<_, TemperatureStats>(
                    r#"
                    SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax
                    FROM measurement
                    WHERE date >= ? AND date <= ?
                    "#,
                )
                .bind(from)
                .bind(to)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, TemperatureStats>(
                    r#"
                    SELECT MIN(tobs) AS tmin, AVG(tobs) AS tavg, MAX(tobs) AS tmax
                    FROM measurement
                    WHERE date >= ?
                    "#,
                )
                .bind(from)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(stats)
    }

    /// Row counts for both tables
    pub async fn counts(&self) -> Result<StoreCounts> {
        let counts = sqlx::query_as::<_, StoreCounts>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM station) AS stations,
                (SELECT COUNT(*) FROM measurement) AS measurements
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(counts)
    }

    /// First and last observation dates
    pub async fn date_range(&self) -> Result<DateRange> {
        let range = sqlx::query_as::<_, DateRange>(
            "SELECT MIN(date) AS first, MAX(date) AS last FROM measurement",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(range)
    }

    /// The most recent `limit` measurements, newest first
    pub async fn latest_measurements(&self, limit: i64) -> Result<Vec<Measurement>> {
        let rows = sqlx::query_as::<_, Measurement>(
            r#"
            SELECT station, date, prcp, tobs
            FROM measurement
            ORDER BY date DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

/// First day of the year ending at `latest`, formatted like the store's date column.
///
/// The cutoff is `latest - 365 days` and is itself excluded, so the window
/// opens the day after it.
pub fn past_year_start(latest: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(latest, DATE_FORMAT).map_err(|e| {
        ClimateError::InvalidDate {
            value: latest.to_string(),
            message: e.to_string(),
        }
    })?;
    let cutoff = parsed - Duration::days(365);
    Ok((cutoff + Duration::days(1)).format(DATE_FORMAT).to_string())
}
