// Models module

pub mod health;
pub mod user;

// Re-export commonly used types
pub use health::HealthStatus;
pub use user::{User, UsersResponse};
