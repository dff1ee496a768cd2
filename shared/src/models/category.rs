//! Category Model

use serde::{Deserialize, Serialize};

/// Menu category (static reference data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// `cat-NNN`
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Icon name used by the dashboard menu
    #[serde(default)]
    pub icon: Option<String>,
}
