use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryItemRepository};
use crate::routes::with_civic_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use civic_connect::civic::catalog::CatalogService;
use civic_connect::civic::representatives::{GoogleCivicClient, RepresentativeResolver};
use civic_connect::config::AppConfig;
use civic_connect::error::AppError;
use civic_connect::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let directory = GoogleCivicClient::from_config(&config.civic)?;
    if directory.is_none() {
        warn!("GOOGLE_CIVIC_API_KEY not set; representatives are served from synthetic data");
    }
    let resolver = Arc::new(RepresentativeResolver::new(
        directory.map(Arc::new),
        config.civic.timeout,
    ));
    let catalog = Arc::new(CatalogService::new(Arc::new(
        InMemoryItemRepository::default(),
    )));

    let app = with_civic_routes(resolver, catalog)
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        live_source = config.civic.has_api_key(),
        "civic data service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
