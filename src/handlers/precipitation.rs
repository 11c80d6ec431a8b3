//! Precipitation endpoint handler.
//!
//! Returns the last year of precipitation readings as a date-keyed object.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::error::Result;
use crate::handlers::error_response;
use crate::logging::generate_request_id;
use crate::state::AppState;
use crate::store::{past_year_start, Observation};

const ENDPOINT: &str = "/api/v1.0/precipitation";

/// Date-keyed precipitation, serialized in ascending date order
pub type PrecipitationByDate = BTreeMap<String, Option<f64>>;

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing precipitation request"
    );

    match last_year_of_precipitation(&state).await {
        Ok(by_date) => {
            let duration = start_time.elapsed();
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = duration.as_micros() as u64,
                dates = by_date.len(),
                "Precipitation request successful"
            );
            Json(by_date).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}

async fn last_year_of_precipitation(state: &AppState) -> Result<PrecipitationByDate> {
    let Some(latest) = state.store.max_date().await? else {
        return Ok(PrecipitationByDate::new());
    };
    let since = past_year_start(&latest)?;
    let rows = state.store.precipitation_since(&since).await?;
    Ok(collapse_by_date(rows))
}

/// Key readings by date. Several stations report on the same day, and only
/// the reading that comes last in store order survives for that date.
pub fn collapse_by_date(rows: Vec<Observation>) -> PrecipitationByDate {
    let mut by_date = PrecipitationByDate::new();
    for row in rows {
        by_date.insert(row.date, row.value);
    }
    by_date
}
