use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every successful door state change produces an Event.
/// Callers that only care about the `Result` can ignore the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    DoorUnlocked {
        timeout_secs: u64,
        at: DateTime<Utc>,
    },
    DoorLocked {
        at: DateTime<Utc>,
    },
    /// Point-in-time status of a door, produced by `snapshot()`.
    StatusSnapshot {
        open: bool,
        timeout_secs: u64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Serialize to JSON for external consumers.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
