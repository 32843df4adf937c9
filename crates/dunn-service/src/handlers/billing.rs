//! Billing trigger and schedule handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use dunn_billing::{BillingPeriod, BillingRun};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for starting the recurring schedule.
#[derive(Debug, Deserialize)]
pub struct StartBillingRequest {
    /// Cadence of the schedule.
    pub period: BillingPeriod,
    /// Interval in milliseconds; required when `period` is `custom`.
    #[serde(default)]
    pub interval_ms: Option<u64>,
}

/// Response for schedule lifecycle changes.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    /// "started" or "stopped".
    pub status: String,
}

/// Run one billing batch now and return its outcome mapping.
pub async fn run_now(State(state): State<Arc<AppState>>) -> Result<Json<BillingRun>, ApiError> {
    let run = state.engine.bill().await?;
    Ok(Json(run))
}

/// Start recurring billing.
pub async fn start(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StartBillingRequest>,
) -> Result<Json<ScheduleResponse>, ApiError> {
    let interval = request.interval_ms.map(Duration::from_millis);
    state.start_recurring(request.period, interval).await?;
    Ok(Json(ScheduleResponse {
        status: "started".to_string(),
    }))
}

/// Stop recurring billing.
pub async fn stop(State(state): State<Arc<AppState>>) -> Result<Json<ScheduleResponse>, ApiError> {
    state.stop_recurring().await?;
    Ok(Json(ScheduleResponse {
        status: "stopped".to_string(),
    }))
}
