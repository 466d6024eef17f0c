use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::site_router;
use axum_prometheus::PrometheusMetricLayer;
use portfolio::config::AppConfig;
use portfolio::content::Catalog;
use portfolio::error::AppError;
use portfolio::telemetry;
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
    Catalog::validate()?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState::new(
        config.site.clone(),
        readiness_flag.clone(),
        prometheus_handle,
    );

    let app = site_router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        root_id = %config.site.root_id,
        defer_sections = config.site.defer_sections,
        "portfolio site ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
