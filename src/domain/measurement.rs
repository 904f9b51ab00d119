use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of processed clinical data, joined with its type and unit
/// dimensions. Blood pressure readings carry systolic/diastolic instead of a
/// single numeric value.
#[derive(Debug, Clone, Serialize)]
pub struct ClinicalMeasurement {
    pub study_id: String,
    pub participant_id: String,
    pub measurement_type: String,
    pub unit: Option<String>,
    pub value_numeric: Option<f64>,
    pub systolic: Option<i32>,
    pub diastolic: Option<i32>,
    pub quality_score: f64,
    pub is_valid: bool,
    pub quality_flags: Vec<String>,
    pub ts: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct MeasurementFilters {
    pub study_id: Option<String>,
    pub participant_id: Option<String>,
    pub measurement_type: Option<String>,
    pub start_ts: Option<DateTime<Utc>>,
    pub end_ts: Option<DateTime<Utc>>,
    pub is_valid: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl MeasurementFilters {
    pub const DEFAULT_LIMIT: i64 = 100;
    pub const MAX_LIMIT: i64 = 1000;

    pub fn effective_limit(&self) -> i64 {
        self.limit
            .filter(|l| *l > 0)
            .unwrap_or(Self::DEFAULT_LIMIT)
            .min(Self::MAX_LIMIT)
    }

    pub fn effective_offset(&self) -> i64 {
        self.offset.filter(|o| *o >= 0).unwrap_or(0)
    }
}
