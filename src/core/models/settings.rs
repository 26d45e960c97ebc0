use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardSettings {
    // Days ahead (inclusive) that still count as near-due
    pub near_due_days: i64,
    // chrono format string for the "Due ..." line
    pub date_format: String,
    // Delay applied by the demo board's in-memory status update
    pub simulated_latency_ms: u32,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            near_due_days: 3,
            date_format: "%b %d, %Y".to_string(),
            simulated_latency_ms: 400,
        }
    }
}

impl BoardSettings {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("Invalid board settings: {}", e))
    }
}
