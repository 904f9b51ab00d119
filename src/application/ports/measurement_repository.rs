use async_trait::async_trait;

use crate::domain::{ClinicalMeasurement, MeasurementFilters};

use super::StoreError;

#[async_trait]
pub trait MeasurementRepository: Send + Sync {
    async fn query(
        &self,
        filters: &MeasurementFilters,
    ) -> Result<Vec<ClinicalMeasurement>, StoreError>;
}
