use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::MeasurementFilters;
use crate::presentation::state::AppState;

use super::{ApiError, ApiSuccess};

#[derive(Debug, Deserialize)]
pub struct MeasurementQuery {
    #[serde(rename = "studyId")]
    pub study_id: Option<String>,
    #[serde(rename = "participantId")]
    pub participant_id: Option<String>,
    #[serde(rename = "measurementType")]
    pub measurement_type: Option<String>,
    #[serde(rename = "startTs")]
    pub start_ts: Option<DateTime<Utc>>,
    #[serde(rename = "endTs")]
    pub end_ts: Option<DateTime<Utc>>,
    #[serde(rename = "isValid")]
    pub is_valid: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl From<MeasurementQuery> for MeasurementFilters {
    fn from(q: MeasurementQuery) -> Self {
        Self {
            study_id: q.study_id,
            participant_id: q.participant_id,
            measurement_type: q.measurement_type,
            start_ts: q.start_ts,
            end_ts: q.end_ts,
            is_valid: q.is_valid,
            limit: q.limit,
            offset: q.offset,
        }
    }
}

/// GET /api/data
#[tracing::instrument(skip(state))]
pub async fn get_data_handler(
    State(state): State<AppState>,
    Query(query): Query<MeasurementQuery>,
) -> impl IntoResponse {
    let filters = MeasurementFilters::from(query);

    match state.measurement_service.query(&filters).await {
        Ok(rows) => ApiSuccess::new(rows, "Data retrieved successfully").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Measurement query failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve data")
                .into_response()
        }
    }
}

/// GET /api/data/studies/{id}
#[tracing::instrument(skip(state))]
pub async fn get_study_data_handler(
    State(state): State<AppState>,
    Path(study_id): Path<String>,
) -> impl IntoResponse {
    match state.measurement_service.study_data(&study_id).await {
        Ok(rows) => {
            ApiSuccess::new(rows, format!("Study {} data retrieved", study_id)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, study_id = %study_id, "Study query failed");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve data")
                .into_response()
        }
    }
}
