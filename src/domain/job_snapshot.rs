use serde::Serialize;

/// Live status as reported by the ETL worker. Fetched on demand and handed
/// straight back to the caller; never persisted. The worker's status string
/// (`queued`, `running`, `completed`, `failed`) is passed through as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobStatusSnapshot {
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub status: String,
    pub progress: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
