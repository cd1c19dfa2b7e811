// Library root for the users API

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

// Re-export commonly used types
pub use config::DbConfig;
pub use db::Database;
pub use error::{ApiError, ApiResult};
pub use models::{HealthStatus, User, UsersResponse};
