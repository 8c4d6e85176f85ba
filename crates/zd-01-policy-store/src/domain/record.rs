//! Per-entity policy record

use serde::{Deserialize, Serialize};

fn default_show_warning() -> bool {
    true
}

/// Notification policy for one storage container or zone.
///
/// Serialized as `{ "showWarning": bool }`; a missing field reads as `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRecord {
    #[serde(rename = "showWarning", default = "default_show_warning")]
    pub show_warning: bool,
}

impl Default for PolicyRecord {
    fn default() -> Self {
        Self { show_warning: true }
    }
}

impl PolicyRecord {
    /// Whether the cleanup pass should evict this record.
    ///
    /// There are no eviction criteria yet, so this is always `false`.
    pub fn should_clean(&self) -> bool {
        false
    }

    /// Restore the default policy.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
