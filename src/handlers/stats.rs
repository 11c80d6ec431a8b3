//! Date-ranged temperature statistics handlers.
//!
//! Both routes take their dates straight from the path. They are not
//! validated; a malformed date only changes which rows match.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::handlers::error_response;
use crate::logging::generate_request_id;
use crate::state::AppState;
use crate::store::TemperatureStats;

/// TMIN/TAVG/TMAX over a date range, echoing the requested bounds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureSummary {
    #[serde(rename = "Start Date")]
    pub start: String,
    #[serde(rename = "End Date", skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}

impl TemperatureSummary {
    pub fn new(start: String, end: Option<String>, stats: TemperatureStats) -> Self {
        Self {
            start,
            end,
            tmin: stats.tmin,
            tavg: stats.tavg,
            tmax: stats.tmax,
        }
    }
}

/// Handle GET /api/v1.0/{start} requests
pub async fn start_stats_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    summarize(&state, start, None).await
}

/// Handle GET /api/v1.0/{start}/{end} requests
pub async fn range_stats_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    summarize(&state, start, Some(end)).await
}

async fn summarize(state: &AppState, start: String, end: Option<String>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let endpoint = match end {
        Some(_) => "/api/v1.0/{start}/{end}",
        None => "/api/v1.0/{start}",
    };

    debug!(
        endpoint = endpoint,
        request_id = %request_id,
        start = %start,
        end = ?end,
        "Processing temperature statistics request"
    );

    match state.store.temperature_stats(&start, end.as_deref()).await {
        Ok(stats) => {
            let duration = start_time.elapsed();
            info!(
                endpoint = endpoint,
                request_id = %request_id,
                start = %start,
                end = ?end,
                duration_us = duration.as_micros() as u64,
                matched = stats.tmin.is_some(),
                "Temperature statistics request successful"
            );
            Json(vec![TemperatureSummary::new(start, end, stats)]).into_response()
        }
        Err(error) => {
            let params = format!("start={}, end={:?}", start, end);
            error_response(error, endpoint, &request_id, Some(&params))
        }
    }
}
