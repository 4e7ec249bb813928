use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryApplicationRepository, InMemoryProgramRepository};
use crate::routes::with_intake_routes;
use axum::extract::DefaultBodyLimit;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use program_intake::config::AppConfig;
use program_intake::error::AppError;
use program_intake::telemetry;
use program_intake::workflows::intake::{ApplicationService, ProgramService};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let programs = Arc::new(InMemoryProgramRepository::default());
    let applications = Arc::new(InMemoryApplicationRepository::default());
    let program_service = Arc::new(ProgramService::new(programs.clone()));
    let application_service = Arc::new(ApplicationService::new(programs, applications));

    let app = with_intake_routes(program_service, application_service)
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "program intake service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
