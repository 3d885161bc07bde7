//! REST API exposing the dashboard model to a UI collaborator.
//!
//! Read endpoints mirror the model's accessors; mutators cover the three
//! user-visible actions:
//! - `GET /outlets` — live table rows
//! - `GET /series` — day labels, per-outlet displayed series, house totals
//! - `GET /billing` — billing summary
//! - `POST /simulate` — refresh the simulated history
//! - `POST /outlets/{index}/toggle` — flip one outlet
//! - `PUT /outlets/{index}/name` — rename one outlet

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use tokio::sync::Mutex;

use crate::model::ConsumptionModel;

/// Application state shared across all request handlers.
///
/// Holds one model behind a mutex: every user action is a single atomic
/// mutation followed by a re-read, so a plain lock is all the coordination
/// the surface needs. Serving multiple households means one state (and one
/// model) per session; this type does not provide a session registry.
pub struct AppState {
    /// The single household model this server exposes.
    pub model: Mutex<ConsumptionModel>,
}

impl AppState {
    /// Wraps a model for sharing with the router.
    pub fn new(model: ConsumptionModel) -> Arc<Self> {
        Arc::new(Self {
            model: Mutex::new(model),
        })
    }
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/outlets", get(handlers::get_outlets))
        .route("/series", get(handlers::get_series))
        .route("/billing", get(handlers::get_billing))
        .route("/simulate", post(handlers::simulate))
        .route("/outlets/{index}/toggle", post(handlers::toggle_outlet))
        .route("/outlets/{index}/name", put(handlers::rename_outlet))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `addr` - Socket address to bind to
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
