/// User domain type
use super::UserId;
use serde::{Deserialize, Serialize};

/// A directory entry
///
/// Serializes as `{"id": 1, "nombre": "Juan"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    #[serde(rename = "nombre")]
    pub name: String,
}

impl User {
    /// Create a user record
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Data for a new user; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    /// Validated name
    pub name: String,
}

/// Data for renaming an existing user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    /// Validated replacement name
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_serializes_with_nombre_field() {
        let user = User::new(UserId::new(1), "Juan");
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value, json!({ "id": 1, "nombre": "Juan" }));
    }

    #[test]
    fn user_deserializes_from_wire_shape() {
        let user: User = serde_json::from_value(json!({ "id": 3, "nombre": "Karen" })).unwrap();
        assert_eq!(user, User::new(UserId::new(3), "Karen"));
    }
}
