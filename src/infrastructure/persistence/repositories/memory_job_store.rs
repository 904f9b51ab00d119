use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::{JobStore, StoreError};
use crate::domain::{Job, JobId, JobStatus};

/// HashMap-backed [`JobStore`] for tests and local runs without Postgres.
#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: Mutex<HashMap<JobId, Job>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.jobs.lock().expect("job store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn create(&self, job: &Job) -> Result<(), StoreError> {
        let mut jobs = self.jobs.lock().expect("job store lock poisoned");
        jobs.entry(job.id).or_insert_with(|| job.clone());
        Ok(())
    }

    async fn get(&self, id: JobId) -> Result<Option<Job>, StoreError> {
        let jobs = self.jobs.lock().expect("job store lock poisoned");
        Ok(jobs.get(&id).cloned())
    }

    async fn update_status(
        &self,
        id: JobId,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), StoreError> {
        let mut jobs = self.jobs.lock().expect("job store lock poisoned");
        if let Some(job) = jobs.get_mut(&id) {
            let now = Utc::now();
            job.status = status;
            job.error_message = error_message.map(str::to_string);
            job.updated_at = now;
            if status.is_terminal() {
                job.completed_at = Some(now);
            }
        }
        Ok(())
    }
}
