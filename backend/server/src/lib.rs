//! Documentation of the wish board behind a birthday celebration page.
//!
//!
//!
//! # General Infrastructure
//! - The celebration page is static, the only dynamic part is the wish board
//! - The board talks to this server over a small JSON API under `/api`
//! - This server owns the only copy of the wishes, kept in a SQLite file
//! - Clients never cache across reloads, every page load lists the board again
//!
//!
//!
//! # Startup
//!
//! **Goal**: Start answering requests right away, even before the database is usable.
//!
//! - Configuration is read from the environment, see [`config`]
//! - The listener binds first, then the database is opened in a background task
//! - Until the database is ready every wish route answers `503` with `{ "error": ... }`
//! - `GET /api/health` reports the same readiness without touching the table
//! - If opening fails the server keeps running and keeps answering `503`
//!
//!
//!
//! # Routes
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | `/api/wishes` | `200` list, oldest first | `503`, `500` |
//! | POST | `/api/wishes` | `201` `{ id, content }` | `400`, `503`, `500` |
//! | DELETE | `/api/wishes/{id}` | `200` `{ message }` | `400`, `503`, `500` |
//! | GET | `/api/health` | `200` `{ message }` | `503` |
//!
//! Deleting an id that does not exist still answers `200`. There is no not-found signal anywhere
//! in the board, the client only cares whether the wish is gone.
//!
//!
//!
//! # Setup
//!
//! Run with logs.
//! ```sh
//! RUST_LOG=info cargo run -p birthday
//! `````
//!
//! Point at another database.
//! ```sh
//! DATABASE_URL=sqlite:///tmp/wishes.db cargo run -p birthday
//! `````
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! `````
use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{delete, get},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;

use routes::{create_handler, delete_handler, health_handler, list_handler};
use state::State;

pub async fn start_server() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::load()?;

    info!("Starting server...");

    let app = router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    state.spawn_initialize();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    state.store.close().await;
    info!("Server shut down");

    Ok(())
}

pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/wishes", get(list_handler).post(create_handler))
        .route("/api/wishes/{id}", delete(delete_handler))
        .route("/api/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
