use diary_server::ai::{AdviceGenerator, EmotionClassifier};
use diary_server::api::{self, Services};
use diary_server::config::Config;
use diary_server::gemini::{GeminiClient, TextGeneration};
use diary_server::migrator;
use diary_server::repository::SeaOrmRepository;
use diary_server::services::MainPageService;
use axum::{routing::get, Router};
use sea_orm::Database;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Load .env if present (dotenvy)
    dotenvy::dotenv().ok();

    diary_server::telemetry::init_telemetry("diary-server");

    let config = Config::from_env().expect("Invalid configuration");

    let (prometheus_layer, metric_handle) = axum_prometheus::PrometheusMetricLayer::pair();

    // Database Connection
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    use sea_orm_migration::MigratorTrait;
    migrator::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    // Initialize Metrics
    diary_server::metrics::init_metrics(&db).await;

    // Gemini Client (shared by classifier and advice)
    let gemini: Arc<dyn TextGeneration> =
        Arc::new(GeminiClient::new(&config.gemini).expect("Failed to build Gemini client"));

    let repository = Arc::new(SeaOrmRepository::new(db));
    let services = Services {
        main_page: Arc::new(MainPageService::from_repository(repository)),
        classifier: Arc::new(EmotionClassifier::new(
            gemini.clone(),
            config.gemini.emotion_prompt.clone(),
        )),
        advice: Arc::new(AdviceGenerator::new(
            gemini,
            config.gemini.advice_prompt.clone(),
        )),
    };

    let app = app(&config, services, prometheus_layer, metric_handle);

    let addr = config.listen_addr();
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

fn app(
    config: &Config,
    services: Services,
    prometheus_layer: axum_prometheus::PrometheusMetricLayer<'static>,
    metric_handle: metrics_exporter_prometheus::PrometheusHandle,
) -> Router {
    let cors_origin = config
        .cors_origin
        .parse::<axum::http::HeaderValue>()
        .expect("CORS_ORIGIN must be a valid header value");

    api::router(services)
        .layer(prometheus_layer)
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<axum::body::Body>| {
                    let matched_path = request
                        .extensions()
                        .get::<axum::extract::MatchedPath>()
                        .map(|matched| matched.as_str());

                    // Span name: "METHOD /path" (e.g. "GET /main")
                    let span_name = if let Some(path) = matched_path {
                        format!("{} {}", request.method(), path)
                    } else {
                        format!("{} {}", request.method(), request.uri().path())
                    };

                    let user_ip = request
                        .headers()
                        .get("x-forwarded-for")
                        .and_then(|v| v.to_str().ok())
                        .or_else(|| {
                            request
                                .headers()
                                .get("x-real-ip")
                                .and_then(|v| v.to_str().ok())
                        })
                        .unwrap_or("unknown");

                    // Handlers fill in the empty fields
                    tracing::info_span!(
                        "request",
                        "otel.name" = span_name,
                        user_ip = user_ip,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        table = tracing::field::Empty,
                        action = tracing::field::Empty,
                        user_id = tracing::field::Empty,
                        business_event = tracing::field::Empty,
                        error = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency = tracing::field::Empty,
                    )
                })
                .on_request(|_request: &axum::http::Request<axum::body::Body>, _span: &tracing::Span| {
                    // Silence the default "started processing request" event
                })
                .on_response(|response: &axum::http::Response<_>, latency: std::time::Duration, span: &tracing::Span| {
                    span.record("status", tracing::field::display(response.status()));
                    span.record("latency", tracing::field::debug(latency));

                    tracing::info!("request completed");
                }))
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(cors_origin)
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .allow_credentials(true),
        )
        .route("/metrics", get(|| async move { metric_handle.render() }))
}
