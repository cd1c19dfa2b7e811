use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Database-layer failures, by the phase they occur in.
///
/// Each variant carries the driver's message as free text; clients only ever
/// see that text, never a structured code.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Cannot reach or authenticate to the database.
    #[error("connection error: {0}")]
    Connection(String),

    /// Table creation or seeding failed.
    #[error("schema error: {0}")]
    Schema(String),

    /// A select against an existing connection failed.
    #[error("query error: {0}")]
    Query(String),
}

/// Renders every variant as `500 {"error": "<message>"}`.
///
/// Only the `/users` routes let errors reach this point; `/health` downgrades
/// them into its own 200 body before they propagate.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::Connection(_) => tracing::error!("database unreachable: {}", message),
            ApiError::Schema(_) => tracing::error!("schema initialization failed: {}", message),
            ApiError::Query(_) => tracing::error!("query failed: {}", message),
        }

        let body = Json(json!({ "error": message }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

// Result type alias for convenience
pub type ApiResult<T> = Result<T, ApiError>;
