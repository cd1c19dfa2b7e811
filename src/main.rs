use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::{error, info};

use users_api::{
    db::Database,
    handlers::{health_check, users::list_users},
    middleware::{create_middleware_stack, init_tracing},
};

/// Fixed bind port; a fronting process manager or ingress remaps it if needed.
const SERVE_PORT: u16 = 5000;

#[tokio::main]
async fn main() {
    // Load .env file if it exists (for local development)
    dotenvy::dotenv().ok();

    // Initialize structured logging
    if let Err(e) = init_tracing() {
        eprintln!("Failed to initialize tracing: {}", e);
        std::process::exit(1);
    }

    // The database is reached lazily, one connection per request; the server
    // must come up even when the database is down, so nothing is probed here.
    let database = Arc::new(Database::new());

    // Create the Axum router with all endpoints
    let app = create_router(database);

    let addr = SocketAddr::from(([0, 0, 0, 0], SERVE_PORT));
    info!("Starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            info!("Server listening on {}", addr);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Start the server with graceful shutdown handling
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Create the Axum router with all endpoints and middleware
fn create_router(database: Arc<Database>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // User listing, also served under /api for ingress-prefix compatibility
        .route("/users", get(list_users))
        .route("/api/users", get(list_users))
        // Add shared state (database access layer)
        .with_state(database)
        // Apply middleware stack
        .layer(create_middleware_stack())
}

/// Graceful shutdown signal handler
/// Listens for SIGTERM and SIGINT signals
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
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, initiating graceful shutdown");
        },
    }
}
