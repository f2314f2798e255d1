//! Axum route handlers for the job feed.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::job::{JobRecord, JobSummary};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SampleJobsResponse {
    pub jobs: Vec<JobRecord>,
}

/// GET /api/job-summaries
pub async fn handle_job_summaries(State(state): State<AppState>) -> Json<Vec<JobSummary>> {
    Json(state.jobs.job_summaries().await)
}

/// GET /api/v1/jobs
///
/// Full memoized feed, newest first.
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobRecord>> {
    Json(state.jobs.fetch_jobs().await.as_ref().clone())
}

/// GET /api/jobs
///
/// Legacy sample listing. Not backed by the ingestion pipeline.
pub async fn handle_sample_jobs() -> Json<SampleJobsResponse> {
    Json(SampleJobsResponse {
        jobs: vec![JobRecord {
            id: "1".to_string(),
            title: "Senior Frontend Developer".to_string(),
            company: "TechCorp Inc.".to_string(),
            location: "San Francisco, CA".to_string(),
            salary: "$120k - $160k".to_string(),
            description: "We're looking for a senior frontend developer to join our team and help build the next generation of web applications.".to_string(),
            skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Next.js".to_string(),
                "Tailwind CSS".to_string(),
            ],
            posted_date: "2 days ago".to_string(),
            linkedin_url: Some("https://linkedin.com/jobs/123456".to_string()),
            ..JobRecord::default()
        }],
    })
}
