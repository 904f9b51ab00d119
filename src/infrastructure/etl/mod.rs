mod http_etl_client;

pub use http_etl_client::HttpEtlClient;
