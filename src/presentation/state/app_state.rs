use std::sync::Arc;

use crate::application::services::{JobService, MeasurementService};

#[derive(Clone)]
pub struct AppState {
    pub job_service: Arc<JobService>,
    pub measurement_service: Arc<MeasurementService>,
}
