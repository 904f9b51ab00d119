mod memory_job_store;
mod pg_job_store;
mod pg_measurement_repository;

pub use memory_job_store::InMemoryJobStore;
pub use pg_job_store::PgJobStore;
pub use pg_measurement_repository::PgMeasurementRepository;
