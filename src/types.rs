//! Wire types for the activity classifier

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single activity interval reported by an upstream source.
///
/// Timestamps travel as ISO-8601 strings. `ended_at >= started_at` is not
/// enforced; negative intervals flow through classification unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub user_id: String,
    pub source: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    /// Free-form source-specific payload; empty when absent.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ActivityEvent {
    /// Interval length in minutes, negative when the event ends before it
    /// starts. Millisecond precision so fractional seconds survive the
    /// division.
    pub fn duration_minutes(&self) -> f64 {
        (self.ended_at - self.started_at).num_milliseconds() as f64 / 60_000.0
    }
}

/// Outcome of running a classification policy over one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: String,
    /// Intended range [0, 1]; not validated today.
    pub confidence: f32,
    /// Ordered, human-readable decision trail.
    pub rationale: Vec<String>,
}

/// Response envelope for `POST /v1/classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub status: String,
    pub result: ClassificationResult,
}
