//! API handlers

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::extract::AppJson;
use crate::api::AppState;
use crate::types::{ActivityEvent, ClassifyResponse};
use crate::SERVICE_NAME;

/// Liveness probe: fixed payload, no failure modes.
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        time: Utc::now(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub time: DateTime<Utc>,
}

/// Readiness probe: liveness payload plus per-dependency checks.
///
/// The heuristic policy has nothing to probe, so its check is always "ok"; a
/// model-backed policy reports its load state here.
pub async fn readyz() -> Json<ReadyResponse> {
    let mut checks = HashMap::new();
    checks.insert("policy".to_string(), "ok".to_string());

    Json(ReadyResponse {
        status: "ok",
        service: SERVICE_NAME,
        time: Utc::now(),
        checks,
    })
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub time: DateTime<Utc>,
    pub checks: HashMap<String, String>,
}

/// Classify one activity event with the configured policy.
///
/// Request-scoped and side-effect free; the handler reads only its own input.
pub async fn classify(
    State(state): State<AppState>,
    AppJson(event): AppJson<ActivityEvent>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let result = state.policy.classify(&event).await?;

    tracing::debug!(
        user_id = %event.user_id,
        source = %event.source,
        category = %result.category,
        "Classified activity event"
    );

    Ok(Json(ClassifyResponse {
        status: "ok".to_string(),
        result,
    }))
}
