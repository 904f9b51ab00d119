use async_trait::async_trait;

use crate::domain::{Job, JobId, JobStatus};

use super::StoreError;

/// Persistence boundary for ETL job records. All job-state mutation in the
/// system goes through this trait.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Inserts a job record. Inserting an identifier that already exists is a
    /// no-op, so at-least-once submission retries upstream stay harmless.
    async fn create(&self, job: &Job) -> Result<(), StoreError>;

    async fn get(&self, id: JobId) -> Result<Option<Job>, StoreError>;

    /// Writes a new status (and optional error message), bumping the
    /// last-updated timestamp. Terminal statuses also set `completed_at`.
    async fn update_status(
        &self,
        id: JobId,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), StoreError>;
}
