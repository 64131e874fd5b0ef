//! Signed-in identity.

use serde::{Deserialize, Serialize};

/// The user behind the current credential, as reported by `/api/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: String,
}
