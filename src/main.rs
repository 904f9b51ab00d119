use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use clinical_gateway::application::services::{JobService, MeasurementService};
use clinical_gateway::infrastructure::etl::HttpEtlClient;
use clinical_gateway::infrastructure::observability::{init_tracing, TracingConfig};
use clinical_gateway::infrastructure::persistence::{
    create_pool, PgJobStore, PgMeasurementRepository,
};
use clinical_gateway::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::new(
            environment.to_string(),
            settings.logging.enable_json,
        ),
        settings.server.port,
    );

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    sqlx::migrate!().run(&pool).await?;

    let etl_client = Arc::new(HttpEtlClient::with_timeout(
        &settings.etl.base_url,
        Duration::from_secs(settings.etl.timeout_secs),
    )?);
    let job_store = Arc::new(PgJobStore::new(pool.clone()));
    let measurement_repository = Arc::new(PgMeasurementRepository::new(pool));

    let state = AppState {
        job_service: Arc::new(JobService::new(job_store, etl_client)),
        measurement_service: Arc::new(MeasurementService::new(measurement_repository)),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
