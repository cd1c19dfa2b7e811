// Handlers module
// HTTP handlers for the service's three routes

pub mod users;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::{db::Database, models::HealthStatus};

/// Liveness/readiness probe
/// GET /health
///
/// Always responds 200. Database reachability is reported inside the body:
/// any connect or query failure is downgraded to an `"error: <message>"`
/// string rather than a non-200 status.
pub async fn health_check(State(db): State<Arc<Database>>) -> impl IntoResponse {
    let status = match db.probe().await {
        Ok(()) => HealthStatus::reachable(),
        Err(e) => HealthStatus::error(e),
    };

    (StatusCode::OK, Json(status))
}
