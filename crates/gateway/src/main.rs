//! DocLens API Gateway
//!
//! The entry point for all external API requests. Handles:
//! - Document upload and text extraction
//! - Document, prompt-template, and analysis listings
//! - AI analysis invocation and persistence
//! - Synthetic upload-progress streaming (SSE)
//! - Observability (logging, metrics, tracing)

mod handlers;
mod progress;
mod services;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use doclens_common::{ai, config::AppConfig, db::Repository, metrics};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use services::AppState;

/// Request body cap for the upload route. Larger than the 5 MiB file
/// limit so the pipeline's own size check is the one clients observe.
const UPLOAD_BODY_LIMIT: usize = 8 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = EnvFilter::new(&config.observability.log_level);
    if config.observability.json_logging {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Starting DocLens gateway v{}", doclens_common::VERSION);

    // Initialize metrics
    metrics::register_metrics();
    let metrics_handle = PrometheusBuilder::new().install_recorder()?;

    // Initialize database connection
    info!("Connecting to database...");
    let repo = Repository::connect(&config.database).await?;

    // Initialize the generative-AI client
    let generator = ai::create_generator(&config.gemini)?;

    // Create app state
    let state = AppState::new(repo, generator);

    // Build the router
    let app = create_router(state, metrics_handle);

    // Start the server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create the main application router
fn create_router(state: AppState, metrics_handle: PrometheusHandle) -> Router {
    // CORS configuration (all origins, matching the public upload UI)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Request ID propagation
    let request_id = SetRequestIdLayer::x_request_id(MakeRequestUuid);
    let propagate_id = PropagateRequestIdLayer::x_request_id();

    Router::new()
        // Health endpoints
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .route("/readiness", get(handlers::health::ready))
        .route(
            "/metrics",
            get(move || async move { metrics_handle.render() }),
        )
        // Document endpoints
        .route("/upload", post(handlers::documents::upload_document))
        .route("/documents", get(handlers::documents::list_documents))
        // Prompt template endpoints
        .route("/prompt-templates", get(handlers::templates::list_templates))
        // Analysis endpoints
        .route("/analyze", post(handlers::analyses::analyze_document))
        .route("/save-analysis", post(handlers::analyses::save_analysis))
        .route("/analyses", get(handlers::analyses::list_analyses))
        // Progress stream
        .route("/stream/{file_id}", get(handlers::stream::stream_progress))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(request_id)
        .layer(propagate_id)
        .with_state(state)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting shutdown..."),
        _ = terminate => info!("Received SIGTERM, starting shutdown..."),
    }
}
