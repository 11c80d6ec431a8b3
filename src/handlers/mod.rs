//! HTTP request handlers for the climate-api.
//!
//! This module contains all the endpoint handlers for the web server, plus
//! the router that wires them to their paths.

pub mod heartbeat;
pub mod home;
pub mod precipitation;
pub mod stations;
pub mod stats;
pub mod tobs;

pub use heartbeat::heartbeat_handler;
pub use home::home_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use stats::{range_stats_handler, start_stats_handler};
pub use tobs::tobs_handler;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::error::ClimateError;
use crate::logging::{create_http_trace_layer, log_request_error};
use crate::state::AppState;

/// Build the application router over the given state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/heartbeat", get(heartbeat_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/:start", get(start_stats_handler))
        .route("/api/v1.0/:start/:end", get(range_stats_handler))
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Log a failed request and turn it into a 500 JSON body
pub(crate) fn error_response(
    error: ClimateError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(&error, endpoint, request_id, params);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}
