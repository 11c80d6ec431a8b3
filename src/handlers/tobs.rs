//! Temperature observation endpoint handler.
//!
//! Returns the last year of temperature readings for the station with the
//! most measurements. The year is measured back from that station's own
//! latest reading, not the store-wide one.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::error::Result;
use crate::handlers::error_response;
use crate::logging::generate_request_id;
use crate::state::AppState;
use crate::store::past_year_start;

const ENDPOINT: &str = "/api/v1.0/tobs";

/// One dated temperature reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureObservation {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Temperature")]
    pub temperature: Option<f64>,
}

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing temperature observation request"
    );

    match most_active_station_last_year(&state).await {
        Ok((station, observations)) => {
            let duration = start_time.elapsed();
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                station = station.as_deref().unwrap_or("none"),
                duration_us = duration.as_micros() as u64,
                observation_count = observations.len(),
                "Temperature observation request successful"
            );
            Json(observations).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}

async fn most_active_station_last_year(
    state: &AppState,
) -> Result<(Option<String>, Vec<TemperatureObservation>)> {
    let Some(station) = state.store.most_active_station().await? else {
        return Ok((None, Vec::new()));
    };
    let Some(latest) = state.store.max_date_for_station(&station).await? else {
        return Ok((Some(station), Vec::new()));
    };

    let since = past_year_start(&latest)?;
    let observations = state
        .store
        .temperatures_since(&station, &since)
        .await?
        .into_iter()
        .map(|row| TemperatureObservation {
            date: row.date,
            temperature: row.value,
        })
        .collect();

    Ok((Some(station), observations))
}
