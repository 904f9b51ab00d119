mod envelope;
mod etl_jobs;
mod health;
mod measurements;

pub use envelope::{ApiError, ApiSuccess};
pub use etl_jobs::{get_job_handler, job_status_handler, submit_job_handler, JobResponse};
pub use health::health_handler;
pub use measurements::{get_data_handler, get_study_data_handler};
