//! Heartbeat endpoint handler.
//!
//! Returns server status information, including uptime and what the store holds.

use axum::{extract::State, Json};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::warn;
use uuid::Uuid;

use crate::state::AppState;

/// Random server ID, fixed for the life of the process
static SERVER_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Server start time
static START_TIME: Lazy<SystemTime> = Lazy::new(SystemTime::now);

/// Heartbeat response structure
#[derive(Debug, Serialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Current timestamp (ISO 8601 format)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    pub store: StoreInfo,
    /// "healthy", or "degraded" when the store could not be queried
    pub status: String,
}

/// Store information structure
#[derive(Debug, Serialize)]
pub struct StoreInfo {
    pub path: String,
    pub station_count: Option<i64>,
    pub measurement_count: Option<i64>,
}

/// Record the process start time; called once from `main`
pub fn mark_start() {
    Lazy::force(&START_TIME);
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Json<HeartbeatResponse> {
    let now = SystemTime::now();
    let timestamp = chrono::DateTime::<chrono::Utc>::from(now)
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    let uptime = now
        .duration_since(*START_TIME)
        .unwrap_or(Duration::from_secs(0));

    let (counts, status) = match state.store.counts().await {
        Ok(counts) => (Some(counts), "healthy"),
        Err(error) => {
            warn!(error = %error, "Heartbeat could not query the store");
            (None, "degraded")
        }
    };

    Json(HeartbeatResponse {
        server_id: SERVER_ID.clone(),
        timestamp,
        uptime_seconds: uptime.as_secs(),
        store: StoreInfo {
            path: state.config.database.path.display().to_string(),
            station_count: counts.map(|c| c.stations),
            measurement_count: counts.map(|c| c.measurements),
        },
        status: status.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_util::{get_json, seeded_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_heartbeat_healthy() {
        let dir = tempfile::tempdir().unwrap();
        let state = seeded_state(
            dir.path(),
            &["USC1", "USC2"],
            &[("USC1", "2017-08-23", Some(0.0), Some(81.0))],
        )
        .await;

        let (status, body) = get_json(state, "/heartbeat").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["store"]["station_count"], 2);
        assert_eq!(body["store"]["measurement_count"], 1);
        assert!(body["server_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_heartbeat_degraded_after_close() {
        let dir = tempfile::tempdir().unwrap();
        let state = seeded_state(dir.path(), &["USC1"], &[]).await;
        state.store.close().await;

        let (status, body) = get_json(state, "/heartbeat").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert!(body["store"]["station_count"].is_null());
    }
}
