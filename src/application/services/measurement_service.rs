use std::sync::Arc;

use crate::application::ports::{MeasurementRepository, StoreError};
use crate::domain::{ClinicalMeasurement, MeasurementFilters};

/// Read-side over the measurement store. Queries are single filtered
/// SELECTs; this layer only shapes the filters.
pub struct MeasurementService {
    repository: Arc<dyn MeasurementRepository>,
}

impl MeasurementService {
    pub fn new(repository: Arc<dyn MeasurementRepository>) -> Self {
        Self { repository }
    }

    pub async fn query(
        &self,
        filters: &MeasurementFilters,
    ) -> Result<Vec<ClinicalMeasurement>, StoreError> {
        self.repository.query(filters).await
    }

    pub async fn study_data(
        &self,
        study_id: &str,
    ) -> Result<Vec<ClinicalMeasurement>, StoreError> {
        let filters = MeasurementFilters {
            study_id: Some(study_id.to_string()),
            limit: Some(MeasurementFilters::MAX_LIMIT),
            ..Default::default()
        };
        self.repository.query(&filters).await
    }
}
