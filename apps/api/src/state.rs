use std::sync::Arc;

use crate::config::Config;
use crate::ingestion::pipeline::JobService;
use crate::outreach::email::OutreachService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Memoized job feed. Ingestion failures never escape it.
    pub jobs: Arc<JobService>,
    pub outreach: Arc<OutreachService>,
}
