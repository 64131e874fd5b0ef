//! Shoutout wall.

use serde::{Deserialize, Serialize};

use super::{validate_message, InputError};

/// A message on the shoutout wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shoutout {
    #[serde(default)]
    pub id: i64,
    pub message: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Body for posting a shoutout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewShoutout {
    message: String,
}

impl NewShoutout {
    /// Validate and trim a message (1–500 characters).
    pub fn new(message: &str) -> Result<Self, InputError> {
        Ok(Self {
            message: validate_message(message)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_shape() {
        let s: Shoutout = serde_json::from_value(json!({
            "id": 4,
            "message": "Go team!",
            "author_name": null,
            "created_at": "2025-02-01 10:00:00"
        }))
        .unwrap();
        assert_eq!(s.id, 4);
        assert!(s.author_name.is_none());
    }

    #[test]
    fn test_new_shoutout_body() {
        let body = NewShoutout::new("  great demo  ").unwrap();
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"message": "great demo"}));
        assert!(NewShoutout::new("").is_err());
    }
}
