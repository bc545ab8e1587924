use std::sync::Arc;

use crate::config::Config;
use crate::scoring::Scorer;
use crate::storage::Storage;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The on-disk JD and results file are only reachable through `storage`,
/// created once at startup — handlers never touch ambient paths.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer backend. Default: SkillOverlapScorer. Swap via SCORER env.
    pub scorer: Arc<dyn Scorer>,
    pub storage: Storage,
}
