//! Axum route handlers for the Outreach API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::models::profile::UserProfile;
use crate::outreach::email::EmailResult;
use crate::outreach::improvements::{generate_improvements, DetailedImprovements};
use crate::state::AppState;

/// Either an inline `job` or a `jobId` from the current feed. An inline job wins.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachRequest {
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub job: Option<JobRecord>,
    #[serde(default)]
    pub job_id: Option<String>,
}

/// POST /api/v1/outreach/cold-email
pub async fn handle_cold_email(
    State(state): State<AppState>,
    Json(request): Json<OutreachRequest>,
) -> Result<Json<EmailResult>, AppError> {
    let (profile, job) = resolve(&state, request).await?;
    Ok(Json(
        state.outreach.generate_cold_email(Some(&profile), Some(&job)),
    ))
}

/// POST /api/v1/outreach/improvements
pub async fn handle_improvements(
    State(state): State<AppState>,
    Json(request): Json<OutreachRequest>,
) -> Result<Json<DetailedImprovements>, AppError> {
    let (profile, job) = resolve(&state, request).await?;
    Ok(Json(generate_improvements(Some(&profile), Some(&job))))
}

async fn resolve(
    state: &AppState,
    request: OutreachRequest,
) -> Result<(UserProfile, JobRecord), AppError> {
    let profile = match request.profile {
        Some(profile) => {
            if let Some(field) = profile.missing_required_field() {
                return Err(AppError::Validation(format!("profile.{field} cannot be empty")));
            }
            profile
        }
        None => UserProfile::sample(),
    };

    let job = match (request.job, request.job_id) {
        (Some(job), _) => job,
        (None, Some(id)) => state
            .jobs
            .find_job(&id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?,
        (None, None) => {
            return Err(AppError::Validation(
                "Either job or jobId is required".to_string(),
            ))
        }
    };

    Ok((profile, job))
}
