use chrono::{DateTime, Utc};

use super::{JobId, JobStatus};

#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub filename: String,
    pub study_id: Option<String>,
    pub status: JobStatus,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Job {
    pub fn new(filename: String, study_id: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: JobId::new(),
            filename,
            study_id,
            status: JobStatus::Pending,
            error_message: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }
}
