use tokio_postgres::{Client, NoTls};
use tracing::{info, warn};

use crate::config::DbConfig;
use crate::error::ApiError;
use crate::models::user::User;

/// Fixed demo rows inserted once when the table is empty, in this order.
const SEED_USERS: [(&str, &str); 3] = [
    ("Ada Lovelace", "ada@example.com"),
    ("Grace Hopper", "grace@example.com"),
    ("Alan Turing", "alan@example.com"),
];

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE
)";

// ON CONFLICT makes concurrent cold-start seeding a no-op instead of a
// unique-violation failure.
const INSERT_SEED_USER: &str =
    "INSERT INTO users (name, email) VALUES ($1, $2) ON CONFLICT (email) DO NOTHING";

const SELECT_USERS: &str = "SELECT id, name, email FROM users ORDER BY id";

/// Data-access layer. Holds no connection state: every call opens a fresh
/// connection from the current environment and drops it on return.
#[derive(Debug, Clone, Default)]
pub struct Database;

impl Database {
    pub fn new() -> Self {
        Database
    }

    /// Open a new connection from a fresh `DbConfig` snapshot.
    ///
    /// The connection task is spawned onto the runtime and terminates when the
    /// returned `Client` is dropped, so release happens on every exit path.
    pub async fn connect(&self) -> Result<Client, ApiError> {
        let config = DbConfig::from_env();

        let port: u16 = config
            .port
            .parse()
            .map_err(|_| ApiError::Connection(format!("invalid DB_PORT value: {}", config.port)))?;

        let (client, connection) = tokio_postgres::Config::new()
            .host(&config.host)
            .port(port)
            .dbname(&config.dbname)
            .user(&config.user)
            .password(&config.password)
            .connect(NoTls)
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                warn!("database connection closed with error: {}", e);
            }
        });

        Ok(client)
    }

    /// Reachability probe: `SELECT 1` over a fresh connection.
    pub async fn probe(&self) -> Result<(), ApiError> {
        let client = self.connect().await?;

        client
            .query_one("SELECT 1", &[])
            .await
            .map_err(|e| ApiError::Query(e.to_string()))?;

        Ok(())
    }

    /// Ensure the `users` table exists and seed it if empty.
    ///
    /// Idempotent, safe to invoke on every request: the DDL is
    /// create-if-absent and the seed only fires when the row count is zero.
    pub async fn init_schema(&self, client: &Client) -> Result<(), ApiError> {
        client
            .execute(CREATE_USERS_TABLE, &[])
            .await
            .map_err(|e| ApiError::Schema(e.to_string()))?;

        let row = client
            .query_one("SELECT COUNT(*) FROM users", &[])
            .await
            .map_err(|e| ApiError::Schema(e.to_string()))?;
        let count: i64 = row.get(0);

        if count == 0 {
            for (name, email) in SEED_USERS {
                client
                    .execute(INSERT_SEED_USER, &[&name, &email])
                    .await
                    .map_err(|e| ApiError::Schema(e.to_string()))?;
            }
            info!("seeded users table with {} rows", SEED_USERS.len());
        }

        Ok(())
    }

    /// All users, ascending by id for a deterministic response body.
    pub async fn list_users(&self, client: &Client) -> Result<Vec<User>, ApiError> {
        let rows = client
            .query(SELECT_USERS, &[])
            .await
            .map_err(|e| ApiError::Query(e.to_string()))?;

        Ok(rows.iter().map(User::from_row).collect())
    }
}
