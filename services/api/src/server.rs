use crate::cli::ServeArgs;
use crate::demo::load_roster;
use crate::infra::{AppState, InMemoryProfileSink, InMemoryRosterProvider};
use crate::routes::with_leadership_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use flock_ai::config::AppConfig;
use flock_ai::error::AppError;
use flock_ai::telemetry;
use flock_ai::workflows::leadership::{ChurchId, LeadershipService};
use std::sync::atomic::Ordering;
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
    let bundled_roster = args.source.is_bundled();
    config.leadership.profile_prefilter_score = args
        .source
        .prefilter_score(&config.leadership, args.prefilter_score);

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let church_id = ChurchId(args.church);
    let roster = load_roster(&args.source)?;
    info!(
        church = %church_id,
        members = roster.members.len(),
        ministries = roster.ministries.len(),
        bundled = bundled_roster,
        "roster loaded"
    );

    let provider = Arc::new(InMemoryRosterProvider::with_roster(church_id, roster));
    let sink = Arc::new(InMemoryProfileSink::default());
    let leadership_service = Arc::new(LeadershipService::new(provider, sink, config.leadership));

    let app = with_leadership_routes(leadership_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "leadership pipeline service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
