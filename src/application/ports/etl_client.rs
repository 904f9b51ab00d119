use async_trait::async_trait;

use crate::domain::JobId;

/// Raw result of a status poll. The client reports the wire-level outcome
/// only; interpreting the HTTP status code and body shape is the job
/// service's responsibility, so the error taxonomy lives in one place.
#[derive(Debug, Clone)]
pub struct RawStatusResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EtlClientError {
    #[error("request timed out")]
    Timeout,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("worker rejected submission with HTTP {0}")]
    UnexpectedStatus(u16),
}

/// HTTP client bound to the ETL worker's base address.
#[async_trait]
pub trait EtlClient: Send + Sync {
    /// Submits a job to the worker. Success means the worker answered with
    /// any 2xx status.
    async fn submit(
        &self,
        job_id: JobId,
        filename: &str,
        study_id: Option<&str>,
    ) -> Result<(), EtlClientError>;

    /// Polls the worker's status endpoint for a job. Returns the raw status
    /// code and body; only transport-level failures are errors here.
    async fn get_status(&self, job_id: &str) -> Result<RawStatusResponse, EtlClientError>;
}
