// User handlers
// HTTP handlers for the user listing routes

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::{db::Database, error::ApiResult, models::UsersResponse};

/// List all users, seeding the table on first use
/// GET /users and GET /api/users (alias for ingress-prefix compatibility)
///
/// Ensures the schema exists before querying, so the first request against an
/// empty database returns the three seed rows. Any failure propagates as a
/// 500 with the raw message in the body.
pub async fn list_users(State(db): State<Arc<Database>>) -> ApiResult<impl IntoResponse> {
    let client = db.connect().await?;
    db.init_schema(&client).await?;

    let users = db.list_users(&client).await?;

    info!("returning {} users", users.len());
    Ok((StatusCode::OK, Json(UsersResponse { users })))
}
