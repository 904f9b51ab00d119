use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::services::{JobStatusError, SubmitJobError};
use crate::domain::{Job, JobId};
use crate::presentation::state::AppState;

use super::{ApiError, ApiSuccess};

#[derive(Deserialize)]
pub struct SubmitJobRequest {
    pub filename: Option<String>,
    #[serde(rename = "studyId")]
    pub study_id: Option<String>,
}

#[derive(Serialize)]
pub struct JobResponse {
    pub id: String,
    pub filename: String,
    #[serde(rename = "studyId", skip_serializing_if = "Option::is_none")]
    pub study_id: Option<String>,
    pub status: String,
    #[serde(rename = "errorMessage", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    #[serde(rename = "completedAt", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id.to_string(),
            filename: job.filename,
            study_id: job.study_id,
            status: job.status.as_str().to_string(),
            error_message: job.error_message,
            created_at: job.created_at.to_rfc3339(),
            updated_at: job.updated_at.to_rfc3339(),
            completed_at: job.completed_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// POST /api/etl/jobs
#[tracing::instrument(skip(state, request))]
pub async fn submit_job_handler(
    State(state): State<AppState>,
    Json(request): Json<SubmitJobRequest>,
) -> impl IntoResponse {
    let filename = match request.filename.as_deref() {
        Some(f) if !f.trim().is_empty() => f,
        _ => {
            return ApiError::new(StatusCode::BAD_REQUEST, "filename is required")
                .into_response();
        }
    };

    match state
        .job_service
        .submit_job(filename, request.study_id.as_deref())
        .await
    {
        Ok(job) => {
            ApiSuccess::new(JobResponse::from(job), "ETL job submitted successfully")
                .into_response()
        }
        Err(SubmitJobError::InvalidFilename) => {
            ApiError::new(StatusCode::BAD_REQUEST, "filename is required").into_response()
        }
        Err(SubmitJobError::Store(e)) => {
            tracing::error!(error = %e, "Failed to persist job");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to submit job")
                .into_response()
        }
    }
}

/// GET /api/etl/jobs/{id}
#[tracing::instrument(skip(state))]
pub async fn get_job_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match Uuid::parse_str(&job_id) {
        Ok(u) => u,
        Err(_) => {
            return ApiError::new(
                StatusCode::BAD_REQUEST,
                format!("Invalid job ID: {}", job_id),
            )
            .into_response();
        }
    };

    match state.job_service.get_job(JobId::from_uuid(uuid)).await {
        Ok(Some(job)) => {
            ApiSuccess::new(JobResponse::from(job), "Job retrieved successfully").into_response()
        }
        Ok(None) => ApiError::new(StatusCode::NOT_FOUND, "Job not found").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch job");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch job")
                .into_response()
        }
    }
}

/// GET /api/etl/jobs/{id}/status
#[tracing::instrument(skip(state))]
pub async fn job_status_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    match state.job_service.fetch_job_status(&job_id).await {
        Ok(snapshot) => {
            ApiSuccess::new(snapshot, "Status retrieved successfully").into_response()
        }
        Err(JobStatusError::NotFound(_)) => {
            ApiError::new(StatusCode::NOT_FOUND, "Job not found").into_response()
        }
        Err(e) => {
            tracing::warn!(job_id = %job_id, error = %e, "Status fetch failed");
            ApiError::new(status_code_for(&e), e.to_string()).into_response()
        }
    }
}

/// HTTP mapping of the status-fetch error taxonomy. The kinds carry enough
/// information to pick a status without inspecting message text.
fn status_code_for(error: &JobStatusError) -> StatusCode {
    match error {
        JobStatusError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        JobStatusError::NotFound(_) => StatusCode::NOT_FOUND,
        JobStatusError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
        JobStatusError::UpstreamError { .. }
        | JobStatusError::UpstreamUnavailable(_)
        | JobStatusError::MalformedUpstreamResponse => StatusCode::BAD_GATEWAY,
    }
}
