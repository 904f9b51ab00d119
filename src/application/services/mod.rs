mod job_service;
mod measurement_service;

pub use job_service::{
    normalize_status_body, JobService, JobStatusError, SubmitJobError, SUBMIT_FAILURE_MESSAGE,
};
pub use measurement_service::MeasurementService;
