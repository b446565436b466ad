//! Classification policies
//!
//! The decision rule lives behind [`ClassificationPolicy`] so the placeholder
//! heuristic can be swapped for a model-backed implementation without
//! touching the HTTP contract.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::types::{ActivityEvent, ClassificationResult};
use crate::Result;

/// Classification policy trait
#[async_trait]
pub trait ClassificationPolicy: Send + Sync {
    /// Short identifier, surfaced in startup logs.
    fn name(&self) -> &'static str;

    /// Produce a category, confidence and rationale for one event.
    async fn classify(&self, event: &ActivityEvent) -> Result<ClassificationResult>;
}

/// Which policy implementation to run
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Heuristic,
}

/// Create the classification policy selected by configuration
pub fn create_policy(kind: &PolicyKind) -> Arc<dyn ClassificationPolicy> {
    match kind {
        PolicyKind::Heuristic => Arc::new(HeuristicPolicy),
    }
}

/// Confidence reported for every heuristic decision.
const HEURISTIC_CONFIDENCE: f32 = 0.75;

/// Placeholder rule used until a real model ships: sources beginning with
/// "notion" are "work", everything else is "exercise". The match is
/// case-sensitive and the confidence is fixed.
#[derive(Debug, Clone, Default)]
pub struct HeuristicPolicy;

#[async_trait]
impl ClassificationPolicy for HeuristicPolicy {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn classify(&self, event: &ActivityEvent) -> Result<ClassificationResult> {
        let category = if event.source.starts_with("notion") {
            "work"
        } else {
            "exercise"
        };

        // Negative intervals are possible (ended_at < started_at is not
        // validated) and format with a leading minus.
        let rationale = vec![
            format!("source={}", event.source),
            format!("duration_minutes={:.1}", event.duration_minutes()),
        ];

        Ok(ClassificationResult {
            category: category.to_string(),
            confidence: HEURISTIC_CONFIDENCE,
            rationale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn event(source: &str, started_at: &str, ended_at: &str) -> ActivityEvent {
        ActivityEvent {
            user_id: "user-1".to_string(),
            source: source.to_string(),
            started_at: started_at.parse().unwrap(),
            ended_at: ended_at.parse().unwrap(),
            metadata: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn test_notion_prefix_is_work() {
        let policy = HeuristicPolicy;
        let result = policy
            .classify(&event(
                "notion-calendar",
                "2024-01-01T10:00:00Z",
                "2024-01-01T10:30:00Z",
            ))
            .await
            .unwrap();

        assert_eq!(result.category, "work");
        assert_eq!(result.confidence, 0.75);
        assert_eq!(
            result.rationale,
            vec!["source=notion-calendar", "duration_minutes=30.0"]
        );
    }

    #[tokio::test]
    async fn test_bare_notion_is_work() {
        let policy = HeuristicPolicy;
        let result = policy
            .classify(&event(
                "notion",
                "2024-01-01T09:00:00Z",
                "2024-01-01T09:05:00Z",
            ))
            .await
            .unwrap();

        assert_eq!(result.category, "work");
    }

    #[tokio::test]
    async fn test_prefix_match_is_case_sensitive() {
        let policy = HeuristicPolicy;
        let result = policy
            .classify(&event(
                "Notion-calendar",
                "2024-01-01T09:00:00Z",
                "2024-01-01T09:05:00Z",
            ))
            .await
            .unwrap();

        assert_eq!(result.category, "exercise");
    }

    #[tokio::test]
    async fn test_other_sources_are_exercise() {
        let policy = HeuristicPolicy;
        for source in ["strava", "garmin-connect", ""] {
            let result = policy
                .classify(&event(source, "2024-01-01T07:00:00Z", "2024-01-01T08:00:00Z"))
                .await
                .unwrap();
            assert_eq!(result.category, "exercise", "source {:?}", source);
        }
    }

    #[tokio::test]
    async fn test_rationale_has_exactly_two_entries() {
        let policy = HeuristicPolicy;
        let result = policy
            .classify(&event(
                "strava",
                "2024-01-01T07:00:00Z",
                "2024-01-01T07:45:00Z",
            ))
            .await
            .unwrap();

        assert_eq!(result.rationale.len(), 2);
        assert_eq!(result.rationale[0], "source=strava");
        assert_eq!(result.rationale[1], "duration_minutes=45.0");
    }

    #[tokio::test]
    async fn test_fractional_minutes_format_to_one_decimal() {
        let policy = HeuristicPolicy;
        let result = policy
            .classify(&event(
                "strava",
                "2024-01-01T07:00:00Z",
                "2024-01-01T07:01:30Z",
            ))
            .await
            .unwrap();

        assert_eq!(result.rationale[1], "duration_minutes=1.5");
    }

    #[tokio::test]
    async fn test_negative_interval_formats_with_sign() {
        // ended_at before started_at is not rejected; the latent negative
        // duration is pinned here.
        let policy = HeuristicPolicy;
        let result = policy
            .classify(&event(
                "strava",
                "2024-01-01T10:10:00Z",
                "2024-01-01T10:00:00Z",
            ))
            .await
            .unwrap();

        assert_eq!(result.rationale[1], "duration_minutes=-10.0");
    }

    #[test]
    fn test_create_policy_heuristic() {
        let policy = create_policy(&PolicyKind::Heuristic);
        assert_eq!(policy.name(), "heuristic");
    }
}
