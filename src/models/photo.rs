//! Photo gallery entries.

use serde::{Deserialize, Serialize};

/// A gallery photo. The image itself lives in external storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub taken_at: Option<String>,
}
