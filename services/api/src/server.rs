use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::readiness_router;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use travel_ready::config::AppConfig;
use travel_ready::error::AppError;
use travel_ready::readiness::ReadinessEngine;
use travel_ready::telemetry;
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
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        engine: Arc::new(ReadinessEngine::new(config.readiness.clone())),
    };

    let app = readiness_router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        destination_risk = config.readiness.destination_risk,
        document_completeness = config.readiness.document_completeness,
        "travel readiness service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
