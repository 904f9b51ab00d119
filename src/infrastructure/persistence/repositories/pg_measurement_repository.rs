use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{MeasurementRepository, StoreError};
use crate::domain::{ClinicalMeasurement, MeasurementFilters};

pub struct PgMeasurementRepository {
    pool: PgPool,
}

impl PgMeasurementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn measurement_from_row(row: &PgRow) -> Result<ClinicalMeasurement, StoreError> {
    let get = |e: sqlx::Error| StoreError::QueryFailed(e.to_string());

    Ok(ClinicalMeasurement {
        study_id: row.try_get("study_id").map_err(get)?,
        participant_id: row.try_get("participant_id").map_err(get)?,
        measurement_type: row.try_get("measurement_type").map_err(get)?,
        unit: row.try_get("unit").map_err(get)?,
        value_numeric: row.try_get("value_numeric").map_err(get)?,
        systolic: row.try_get("systolic").map_err(get)?,
        diastolic: row.try_get("diastolic").map_err(get)?,
        quality_score: row.try_get("quality_score").map_err(get)?,
        is_valid: row.try_get("is_valid").map_err(get)?,
        quality_flags: row.try_get("quality_flags").map_err(get)?,
        ts: row.try_get("ts").map_err(get)?,
    })
}

#[async_trait]
impl MeasurementRepository for PgMeasurementRepository {
    #[instrument(skip(self, filters))]
    async fn query(
        &self,
        filters: &MeasurementFilters,
    ) -> Result<Vec<ClinicalMeasurement>, StoreError> {
        // One parameterized SELECT; absent filters collapse to IS NULL.
        let rows = sqlx::query(
            r#"
            SELECT
                fm.study_id,
                fm.participant_id,
                mt.name AS measurement_type,
                u.name  AS unit,
                fm.value_numeric,
                fm.systolic,
                fm.diastolic,
                fm.quality_score,
                fm.is_valid,
                fm.quality_flags,
                fm.ts
            FROM fact_measurement fm
            JOIN dim_measurement_type mt ON mt.id = fm.measurement_type_id
            LEFT JOIN dim_unit         u ON u.id  = fm.unit_id
            WHERE
                ($1::text            IS NULL OR fm.study_id = $1)
                AND ($2::text        IS NULL OR fm.participant_id = $2)
                AND ($3::text        IS NULL OR mt.name = $3)
                AND ($4::timestamptz IS NULL OR fm.ts >= $4)
                AND ($5::timestamptz IS NULL OR fm.ts <  $5)
                AND ($6::boolean     IS NULL OR fm.is_valid = $6)
            ORDER BY fm.ts DESC
            LIMIT $7 OFFSET $8
            "#,
        )
        .bind(&filters.study_id)
        .bind(&filters.participant_id)
        .bind(&filters.measurement_type)
        .bind(filters.start_ts)
        .bind(filters.end_ts)
        .bind(filters.is_valid)
        .bind(filters.effective_limit())
        .bind(filters.effective_offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::QueryFailed(e.to_string()))?;

        rows.iter().map(measurement_from_row).collect()
    }
}
