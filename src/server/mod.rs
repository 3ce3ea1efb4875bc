//! Server setup and shared application state

pub mod handlers;

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::pipeline::InsightPipeline;

/// Shared application state for the HTTP server
pub struct AppState {
    pipeline: InsightPipeline,
    default_target: String,
    is_ready: AtomicBool,
    requests: AtomicUsize,
}

impl AppState {
    /// Create application state with readiness unset
    pub fn new(pipeline: InsightPipeline, default_target: String) -> Self {
        Self {
            pipeline,
            default_target,
            is_ready: AtomicBool::new(false),
            requests: AtomicUsize::new(0),
        }
    }

    /// Mark the server as ready to accept requests
    pub fn mark_ready(&self) {
        self.is_ready.store(true, Ordering::SeqCst);
    }

    /// Count a handled request and return the running total
    pub fn request_handled(&self) -> usize {
        self.requests.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Access the pipeline for downstream handlers
    pub fn pipeline(&self) -> &InsightPipeline {
        &self.pipeline
    }

    /// Target language used when a request names none
    pub fn default_target(&self) -> &str {
        &self.default_target
    }
}

/// Build the HTTP router for the service
pub fn build_router(state: Arc<AppState>, enable_cors: bool) -> Router {
    let router = Router::new()
        .route("/process", post(handlers::process))
        .route("/healthz", get(health))
        .route("/readyz", get(readiness))
        .with_state(state);

    if enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Run the service until a shutdown signal arrives
pub async fn serve(config: AppConfig) -> crate::Result<()> {
    let pipeline = InsightPipeline::from_config(&config);
    let state = Arc::new(AppState::new(
        pipeline,
        config.translation.default_target.clone(),
    ));
    let router = build_router(state.clone(), config.server.enable_cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Listening on http://{}", config.bind_addr());
    state.mark_ready();

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.pipeline().metrics().log_stats();
    Ok(())
}

/// Liveness probe endpoint
async fn health() -> &'static str {
    "OK"
}

/// Readiness probe endpoint
async fn readiness(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if state.is_ready.load(Ordering::SeqCst) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Wait for a shutdown signal
pub async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
