pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ingestion::handlers as jobs;
use crate::outreach::handlers as outreach;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job feed
        .route("/api/job-summaries", get(jobs::handle_job_summaries))
        .route("/api/jobs", get(jobs::handle_sample_jobs))
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        // Outreach
        .route(
            "/api/v1/outreach/cold-email",
            post(outreach::handle_cold_email),
        )
        .route(
            "/api/v1/outreach/improvements",
            post(outreach::handle_improvements),
        )
        .with_state(state)
}
