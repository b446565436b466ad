//! API server state

use std::sync::Arc;

use crate::classifier::{ClassificationPolicy, HeuristicPolicy};

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Active classification policy
    pub policy: Arc<dyn ClassificationPolicy>,
}

impl AppState {
    /// Create state around an already-built policy
    pub fn new(policy: Arc<dyn ClassificationPolicy>) -> Self {
        Self { policy }
    }

    /// Convenience constructor running the placeholder heuristic policy
    pub fn heuristic() -> Self {
        Self::new(Arc::new(HeuristicPolicy))
    }
}
