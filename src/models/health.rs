use serde::Serialize;

/// Body of `GET /health`.
///
/// `status` reports process liveness and is always `"ok"`; `database` reports
/// reachability independently: `"reachable"` or an `"error: <message>"`
/// string. The endpoint itself never returns a non-200 status.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: String,
}

impl HealthStatus {
    pub fn reachable() -> Self {
        HealthStatus {
            status: "ok",
            database: "reachable".to_string(),
        }
    }

    pub fn error(message: impl std::fmt::Display) -> Self {
        HealthStatus {
            status: "ok",
            database: format!("error: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reachable_body() {
        let value = serde_json::to_value(HealthStatus::reachable()).unwrap();
        assert_eq!(value, json!({"status": "ok", "database": "reachable"}));
    }

    #[test]
    fn test_error_body_keeps_status_ok() {
        let value = serde_json::to_value(HealthStatus::error("connection refused")).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["database"], "error: connection refused");
    }
}
