mod job;
mod job_id;
mod job_snapshot;
mod job_status;
mod measurement;

pub use job::Job;
pub use job_id::JobId;
pub use job_snapshot::JobStatusSnapshot;
pub use job_status::JobStatus;
pub use measurement::{ClinicalMeasurement, MeasurementFilters};
