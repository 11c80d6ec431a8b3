//! # climate-api
//!
//! A read-only JSON API over station metadata and daily climate measurements.
//!
//! This library opens a pre-populated SQLite store (`station` and
//! `measurement` tables) and answers a fixed set of routes with aggregate
//! queries: the last year of precipitation, the station list, the busiest
//! station's temperature observations, and date-ranged temperature statistics.
//!
//! ## Architecture
//!
//! - **Store Layer**: statically typed, read-only queries over a connection pool
//! - **API Layer**: stateless axum handlers that serialize query results to JSON
//! - **State**: configuration plus the store handle, injected into every handler

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{ClimateError, Result};
pub use handlers::router;
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_request_error,
    log_store_stats,
};
pub use state::AppState;
pub use store::{ClimateStore, Measurement, Observation, Station, TemperatureStats};
