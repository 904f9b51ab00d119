mod etl_client;
mod job_store;
mod measurement_repository;
mod store_error;

pub use etl_client::{EtlClient, EtlClientError, RawStatusResponse};
pub use job_store::JobStore;
pub use measurement_repository::MeasurementRepository;
pub use store_error::StoreError;
