//! anythink-server - HTTP binding for the comments gateway
//!
//! Routes:
//!
//! | Method | Path             | Success                 |
//! |--------|------------------|-------------------------|
//! | GET    | `/`              | 200 welcome message     |
//! | GET    | `/comments`      | 200 array of comments   |
//! | POST   | `/comments`      | 201 created comment     |
//! | PUT    | `/comments/{id}` | 200 updated comment     |
//! | DELETE | `/comments/{id}` | 200 confirmation        |
//!
//! Failures are returned as `{"error": "..."}` with 400, 404 or 500.

mod error;
mod handlers;

pub use error::{ApiError, Operation};

use anythink_core::comment::CommentGateway;
use anythink_core::config::ServerConfig;
use anythink_core::error::{AnythinkError, Result};
use axum::routing::{get, put};
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub gateway: CommentGateway,
}

/// Build the application router
pub fn router(gateway: CommentGateway, config: &ServerConfig) -> Router {
    let app = Router::new()
        .route("/", get(handlers::welcome))
        .route(
            "/comments",
            get(handlers::list_comments).post(handlers::create_comment),
        )
        .route(
            "/comments/{id}",
            put(handlers::update_comment).delete(handlers::delete_comment),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { gateway });

    if config.cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app.layer(cors)
    } else {
        app
    }
}

/// Bind the configured address and serve until Ctrl-C
pub async fn run(config: &ServerConfig, gateway: CommentGateway) -> Result<()> {
    let addr = config.addr();

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AnythinkError::Io(e).with_context(format!("Failed to bind to {}", addr)))?;

    info!("Server is running on http://{}", addr);

    serve(listener, router(gateway, config), shutdown_signal()).await
}

/// Serve an already-bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AnythinkError::Io(e).with_context("Server error"))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for Ctrl-C, running until killed: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
