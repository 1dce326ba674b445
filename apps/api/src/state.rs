use std::sync::Arc;

use crate::config::Config;
use crate::matching::ai_matcher::AiRoleMatcher;
use crate::opportunities::fit_scoring::FitScorer;
use crate::opportunities::models::Opportunity;
use crate::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Profile, roadmap and role-match storage. In-memory unless `REDIS_URL` is set.
    pub store: Arc<dyn ProfileStore>,
    pub ai_matcher: Arc<AiRoleMatcher>,
    /// Pluggable fit scorer. Default: RuleBasedFitScorer.
    pub fit_scorer: Arc<dyn FitScorer>,
    /// Opportunity catalog, loaded once at startup.
    pub opportunities: Arc<Vec<Opportunity>>,
}
