use serde::{Deserialize, Serialize};

/// State stored with each pushed history entry so back/forward can find the
/// track again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub index: usize,
    pub path: String,
}

impl HistoryEntry {
    pub fn to_state(&self) -> String {
        // Two plain fields; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// `None` for absent or malformed state, which popstate then ignores.
    pub fn from_state(state: Option<&str>) -> Option<Self> {
        serde_json::from_str(state?).ok()
    }
}
