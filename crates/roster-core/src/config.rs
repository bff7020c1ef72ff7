//! Roster Configuration
//!
//! Element ids, member selector and storage key. The defaults match the
//! roster page; a page may override any of them with an inline JSON block.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Id of the `<select>` holding the sort preference
    pub sort_control_id: String,
    /// Id of the name filter `<input>`
    pub filter_input_id: String,
    /// Id of the element containing the member rows
    pub container_id: String,
    /// CSS selector matching member rows inside the container
    pub member_selector: String,
    /// Local storage key of the saved sort preference
    pub storage_key: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            sort_control_id: "sort".to_string(),
            filter_input_id: "filterName".to_string(),
            container_id: "members".to_string(),
            member_selector: ".member".to_string(),
            storage_key: "sortOrder".to_string(),
        }
    }
}

impl RosterConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}
