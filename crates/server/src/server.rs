//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints
//! - Middleware stack (request id, logging, timeout, compression, CORS)
//! - Tracing subscriber installation
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::middleware::{log_requests, request_id};
use crate::routes::books::{self, BOOKS_PATH, BOOK_BY_ID_PATH};
use crate::openapi::{openapi_json, OPENAPI_PATH};
use crate::routes::{api_info, health, method_not_allowed, not_found};
use crate::state::ServerState;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Build the Axum router with all routes and middleware
///
/// Middleware stack (outermost first):
/// 1. Trace
/// 2. Request ID tracking
/// 3. Request logging
/// 4. CORS
/// 5. Compression
/// 6. Timeout
/// 7. Body size limit
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route(OPENAPI_PATH, get(openapi_json))
        .route(BOOKS_PATH, get(books::list_books).post(books::create_book))
        .route(
            BOOK_BY_ID_PATH,
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.config.max_body_size()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Install the global tracing subscriber described by `config`.
///
/// `RUST_LOG` wins over `log_level` when set. Calling this twice is
/// harmless; the second install is ignored.
pub fn init_tracing(config: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match config.log_format.as_str() {
        "pretty" => builder.pretty().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder
            .with_thread_ids(true)
            .with_thread_names(true)
            .json()
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Start the bookshelf HTTP server
///
/// Installs logging, builds state (seeding the store unless disabled),
/// binds the configured address and serves until SIGTERM or Ctrl+C.
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config);
    config.validate()?;

    let addr: SocketAddr = config.socket_addr()?;
    let state = Arc::new(ServerState::new(config.clone()));

    tracing::info!(
        books = state.store.len(),
        seeded = config.seed_books,
        "Starting bookshelf server on {}",
        addr
    );
    tracing::info!(
        "Timeout: {}s, Max body: {}KB, CORS: {}",
        config.timeout_secs,
        config.max_body_size_kb,
        config.enable_cors
    );

    let listener = TcpListener::bind(addr).await?;
    serve(listener, state, shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Serve `state` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    state: Arc<ServerState>,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
