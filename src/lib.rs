//! Activity classifier - category labels for Daylog activity events
//!
//! A small HTTP service in the Daylog platform, designed to provide:
//! - A stable classify contract (`POST /v1/classify`) for the gateway
//! - A swappable classification policy (placeholder heuristic today)
//! - Health and readiness probes matching the other Daylog services
//! - Simple HTTP/JSON API

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};

/// Service name reported by the health endpoints.
pub const SERVICE_NAME: &str = "activity-classifier";
