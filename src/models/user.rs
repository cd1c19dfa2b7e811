use serde::Serialize;
use tokio_postgres::Row;

/// A user row as served by the API.
///
/// `id` is assigned by the database (`SERIAL`) and is the stable ordering key
/// for list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Envelope for `GET /users` and `GET /api/users`.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

impl User {
    /// Map a `SELECT id, name, email` row to a typed record by column name.
    pub fn from_row(row: &Row) -> Self {
        User {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serializes_with_named_fields() {
        let user = User {
            id: 1,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "name": "Ada Lovelace", "email": "ada@example.com"})
        );
    }

    #[test]
    fn test_users_response_wraps_array() {
        let response = UsersResponse {
            users: vec![
                User {
                    id: 1,
                    name: "Ada Lovelace".to_string(),
                    email: "ada@example.com".to_string(),
                },
                User {
                    id: 2,
                    name: "Grace Hopper".to_string(),
                    email: "grace@example.com".to_string(),
                },
            ],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["users"].as_array().unwrap().len(), 2);
        assert_eq!(value["users"][0]["id"], 1);
        assert_eq!(value["users"][1]["name"], "Grace Hopper");
    }

    #[test]
    fn test_empty_users_response_is_empty_array() {
        let response = UsersResponse { users: vec![] };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"users": []}));
    }
}
