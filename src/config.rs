use std::env;

/// Database connection settings, resolved from the environment.
///
/// Each field falls back to a fixed default when its variable is unset. The
/// port is carried as a string and handed to the connection factory unchanged;
/// an unparsable value surfaces there as a connection error, not here.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub port: String,
}

impl DbConfig {
    /// Read a fresh snapshot of the environment.
    ///
    /// Called once per connection attempt, so overriding a `DB_*` variable
    /// takes effect on the next request without a restart.
    pub fn from_env() -> Self {
        DbConfig {
            host: env::var("DB_HOST").unwrap_or_else(|_| "postgres-service".to_string()),
            dbname: env::var("DB_NAME").unwrap_or_else(|_| "usersdb".to_string()),
            user: env::var("DB_USER").unwrap_or_else(|_| "appuser".to_string()),
            password: env::var("DB_PASSWORD").unwrap_or_else(|_| "changeme".to_string()),
            port: env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_db_env() {
        for key in ["DB_HOST", "DB_NAME", "DB_USER", "DB_PASSWORD", "DB_PORT"] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_unset() {
        clear_db_env();

        let config = DbConfig::from_env();

        assert_eq!(config.host, "postgres-service");
        assert_eq!(config.dbname, "usersdb");
        assert_eq!(config.user, "appuser");
        assert_eq!(config.password, "changeme");
        assert_eq!(config.port, "5432");
    }

    #[test]
    #[serial]
    fn test_env_overrides_defaults() {
        clear_db_env();
        env::set_var("DB_HOST", "10.0.0.7");
        env::set_var("DB_NAME", "other");
        env::set_var("DB_PORT", "6543");

        let config = DbConfig::from_env();

        assert_eq!(config.host, "10.0.0.7");
        assert_eq!(config.dbname, "other");
        assert_eq!(config.user, "appuser");
        assert_eq!(config.port, "6543");

        clear_db_env();
    }

    #[test]
    #[serial]
    fn test_port_is_passed_through_unparsed() {
        clear_db_env();
        env::set_var("DB_PORT", "not-a-port");

        // The loader does not validate; bad values fail later at connect time.
        let config = DbConfig::from_env();
        assert_eq!(config.port, "not-a-port");

        clear_db_env();
    }
}
