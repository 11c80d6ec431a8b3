//! Stations endpoint handler.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::handlers::error_response;
use crate::logging::generate_request_id;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/stations";

/// Handle GET /api/v1.0/stations requests
pub async fn stations_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        "Processing stations request"
    );

    match state.store.all_stations().await {
        Ok(stations) => {
            let duration = start_time.elapsed();
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = duration.as_micros() as u64,
                station_count = stations.len(),
                "Stations request successful"
            );
            Json(stations).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_util::{get_json, seeded_state};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_stations_in_store_order() {
        let dir = tempfile::tempdir().unwrap();
        let state = seeded_state(dir.path(), &["USC1", "USC2"], &[]).await;

        let (status, body) = get_json(state, "/api/v1.0/stations").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["USC1", "USC2"]));
    }

    #[tokio::test]
    async fn test_stations_empty() {
        let dir = tempfile::tempdir().unwrap();
        let state = seeded_state(dir.path(), &[], &[]).await;

        let (_, body) = get_json(state, "/api/v1.0/stations").await;
        assert_eq!(body, json!([]));
    }
}
