use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{instrument, warn};

use crate::application::ports::{EtlClient, EtlClientError, JobStore, StoreError};
use crate::domain::{Job, JobId, JobStatus, JobStatusSnapshot};

/// Stored verbatim on the job record when the worker never accepts a
/// submission, so callers always see a non-empty failure reason.
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to submit to ETL service";

/// Orchestrates the ETL job lifecycle: creates job records, forwards
/// submissions to the worker, and normalizes live status polls into one
/// error taxonomy.
pub struct JobService {
    job_store: Arc<dyn JobStore>,
    etl_client: Arc<dyn EtlClient>,
}

impl JobService {
    pub fn new(job_store: Arc<dyn JobStore>, etl_client: Arc<dyn EtlClient>) -> Self {
        Self {
            job_store,
            etl_client,
        }
    }

    /// Creates a job record and hands it to the ETL worker.
    ///
    /// The `pending` record is persisted before the worker is contacted, so
    /// a record exists no matter how the submission turns out. A rejected or
    /// unreachable worker is not an error from the caller's point of view:
    /// the job comes back in `failed` state with its error message set.
    #[instrument(skip(self))]
    pub async fn submit_job(
        &self,
        filename: &str,
        study_id: Option<&str>,
    ) -> Result<Job, SubmitJobError> {
        if filename.trim().is_empty() {
            return Err(SubmitJobError::InvalidFilename);
        }

        let mut job = Job::new(filename.to_string(), study_id.map(str::to_string));
        self.job_store.create(&job).await?;

        match self.etl_client.submit(job.id, filename, study_id).await {
            Ok(()) => {
                self.job_store
                    .update_status(job.id, JobStatus::Running, None)
                    .await?;
                job.status = JobStatus::Running;
            }
            Err(e) => {
                warn!(job_id = %job.id, error = %e, "ETL submission failed");
                self.job_store
                    .update_status(job.id, JobStatus::Failed, Some(SUBMIT_FAILURE_MESSAGE))
                    .await?;
                job.status = JobStatus::Failed;
                job.error_message = Some(SUBMIT_FAILURE_MESSAGE.to_string());
                job.completed_at = Some(Utc::now());
            }
        }
        job.updated_at = Utc::now();

        Ok(job)
    }

    /// Reads the stored job record. `None` means no such job.
    pub async fn get_job(&self, id: JobId) -> Result<Option<Job>, StoreError> {
        self.job_store.get(id).await
    }

    /// Polls the worker for a job's live status. One round trip, no retries;
    /// retry policy belongs to the caller.
    #[instrument(skip(self))]
    pub async fn fetch_job_status(&self, job_id: &str) -> Result<JobStatusSnapshot, JobStatusError> {
        if job_id.trim().is_empty() {
            return Err(JobStatusError::InvalidArgument(
                "job id must not be empty".to_string(),
            ));
        }

        let response = match self.etl_client.get_status(job_id).await {
            Ok(r) => r,
            Err(EtlClientError::Timeout) => return Err(JobStatusError::UpstreamTimeout),
            Err(EtlClientError::Transport(msg)) => {
                return Err(JobStatusError::UpstreamUnavailable(msg));
            }
            Err(EtlClientError::UnexpectedStatus(status)) => {
                return Err(JobStatusError::UpstreamError { status });
            }
        };

        match response.status {
            404 => Err(JobStatusError::NotFound(job_id.to_string())),
            status if (200..300).contains(&status) => {
                let body: Value = serde_json::from_str(&response.body).map_err(|e| {
                    warn!(job_id, error = %e, "ETL worker returned non-JSON status body");
                    JobStatusError::MalformedUpstreamResponse
                })?;
                normalize_status_body(job_id, &body)
            }
            status => Err(JobStatusError::UpstreamError { status }),
        }
    }
}

/// Normalizes a 2xx status body into a snapshot. Workers disagree on shape:
/// some return the status object directly, some wrap it as `{"data": {...}}`,
/// and the identifier may appear as `jobId` or `id` or not at all.
pub fn normalize_status_body(
    requested_id: &str,
    body: &Value,
) -> Result<JobStatusSnapshot, JobStatusError> {
    let raw = match body.get("data") {
        Some(inner) if inner.is_object() => inner,
        _ => body,
    };

    let job_id = raw
        .get("jobId")
        .or_else(|| raw.get("id"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| requested_id.to_string());
    if job_id.is_empty() {
        return Err(JobStatusError::MalformedUpstreamResponse);
    }

    let status = raw
        .get("status")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(JobStatusError::MalformedUpstreamResponse)?
        .to_string();

    let progress = coerce_progress(raw.get("progress"))?;

    let message = raw
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(JobStatusSnapshot {
        job_id,
        status,
        progress,
        message,
    })
}

/// Progress arrives as a JSON number, a numeric string, or not at all
/// (treated as 0). Anything else is a contract violation.
fn coerce_progress(value: Option<&Value>) -> Result<u8, JobStatusError> {
    let n = match value {
        None | Some(Value::Null) => 0.0,
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or(JobStatusError::MalformedUpstreamResponse)?,
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| JobStatusError::MalformedUpstreamResponse)?,
        Some(_) => return Err(JobStatusError::MalformedUpstreamResponse),
    };
    if !n.is_finite() {
        return Err(JobStatusError::MalformedUpstreamResponse);
    }
    Ok(n.round().clamp(0.0, 100.0) as u8)
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitJobError {
    #[error("filename must not be empty")]
    InvalidFilename,
    #[error("store: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum JobStatusError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("no such job: {0}")]
    NotFound(String),
    #[error("ETL worker did not answer within the request timeout")]
    UpstreamTimeout,
    #[error("ETL worker returned HTTP {status}")]
    UpstreamError { status: u16 },
    #[error("ETL worker unreachable: {0}")]
    UpstreamUnavailable(String),
    #[error("ETL worker returned an unexpected status payload")]
    MalformedUpstreamResponse,
}
