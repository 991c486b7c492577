use serde::{Deserialize, Serialize};

/// A user submitted through the signup form.
///
/// `id` is absent until the record has passed through a
/// [`CreationHandler`](crate::handler::CreationHandler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    // Inbound ids are dropped; only the allocator sets this.
    #[serde(default, skip_deserializing)]
    pub id: Option<u64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    // Free text, never checked against a list of states.
    pub state: String,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            state: state.into(),
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.id.is_some()
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_deserializes_without_id() {
        let user: User = serde_json::from_value(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "state": "active"
        }))
        .unwrap();

        assert_eq!(user, User::new("Ada", "Lovelace", "ada@example.com", "active"));
        assert!(!user.is_assigned());
    }

    #[test]
    fn test_user_deserializes_null_id() {
        let user: User = serde_json::from_value(json!({
            "id": null,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "state": "active"
        }))
        .unwrap();

        assert_eq!(user.id, None);
    }

    #[test]
    fn test_user_ignores_inbound_id() {
        for id in [json!(-1), json!("7"), json!(42), json!({"nested": true})] {
            let user: User = serde_json::from_value(json!({
                "id": id,
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "state": "active"
            }))
            .unwrap();

            assert_eq!(user.id, None);
        }
    }

    #[test]
    fn test_user_missing_field_is_rejected() {
        let result = serde_json::from_value::<User>(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User::new("Grace", "Hopper", "grace@example.com", "New York").with_id(7);

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({
                "id": 7,
                "firstName": "Grace",
                "lastName": "Hopper",
                "email": "grace@example.com",
                "state": "New York"
            })
        );
    }
}
