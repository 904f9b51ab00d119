use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{JobStore, StoreError};
use crate::domain::{Job, JobId, JobStatus};

pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn job_from_row(row: &PgRow) -> Result<Job, StoreError> {
    let status: String = row
        .try_get("status")
        .map_err(|e| StoreError::QueryFailed(e.to_string()))?;
    let status = status
        .parse::<JobStatus>()
        .map_err(StoreError::QueryFailed)?;

    Ok(Job {
        id: JobId::from_uuid(
            row.try_get("id")
                .map_err(|e| StoreError::QueryFailed(e.to_string()))?,
        ),
        filename: row
            .try_get("filename")
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?,
        study_id: row
            .try_get("study_id")
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?,
        status,
        error_message: row
            .try_get("error_message")
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?,
        created_at: row
            .try_get("created_at")
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?,
        updated_at: row
            .try_get("updated_at")
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?,
        completed_at: row
            .try_get("completed_at")
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?,
    })
}

#[async_trait]
impl JobStore for PgJobStore {
    #[instrument(skip(self, job), fields(job_id = %job.id))]
    async fn create(&self, job: &Job) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO etl_jobs (id, filename, study_id, status, error_message, created_at, updated_at, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(job.id.as_uuid())
        .bind(&job.filename)
        .bind(&job.study_id)
        .bind(job.status.as_str())
        .bind(&job.error_message)
        .bind(job.created_at)
        .bind(job.updated_at)
        .bind(job.completed_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(job_id = %id))]
    async fn get(&self, id: JobId) -> Result<Option<Job>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, filename, study_id, status, error_message, created_at, updated_at, completed_at
            FROM etl_jobs
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::QueryFailed(e.to_string()))?;

        row.as_ref().map(job_from_row).transpose()
    }

    #[instrument(skip(self, error_message), fields(job_id = %id, status = %status))]
    async fn update_status(
        &self,
        id: JobId,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), StoreError> {
        let now = Utc::now();

        sqlx::query(
            r#"
            UPDATE etl_jobs
            SET status = $1,
                error_message = $2,
                updated_at = $3,
                completed_at = CASE WHEN $4 THEN $3 ELSE completed_at END
            WHERE id = $5
            "#,
        )
        .bind(status.as_str())
        .bind(error_message)
        .bind(now)
        .bind(status.is_terminal())
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}
