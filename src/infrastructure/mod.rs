pub mod etl;
pub mod observability;
pub mod persistence;
