//! Toggle control contract
//!
//! Storage-container and zone inspection panels each get one toggle. The
//! control is a read-only view of the current policy plus a command; the UI
//! renders it and dispatches the command back, holding no state of its own.

use serde::{Deserialize, Serialize};
use shared_types::EntityId;

use super::store::PolicyStore;

/// Label key shown while notifications are delivered.
pub const LABEL_SHOWING: &str = "ZoneShowDeteriorationMessage";
/// Label key shown while notifications are hidden.
pub const LABEL_HIDING: &str = "ZoneHideDeteriorationMessage";
/// Description key.
pub const DESCRIPTION: &str = "ZoneToggleDeteriorationMessage";
/// Icon texture path.
pub const ICON_PATH: &str = "UI/Commands/LaunchReport";

/// Host inspection panel the control is contributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InspectionPanel {
    StorageContainer,
    Zone,
}

/// Command dispatched when the player activates the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleCommand {
    pub target: EntityId,
}

/// Render model for one toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleControl {
    pub panel: InspectionPanel,
    pub target: EntityId,
    /// Mirrors `show_warning` at build time.
    pub active: bool,
    pub label_key: &'static str,
    pub description_key: &'static str,
    pub icon_path: &'static str,
}

impl ToggleControl {
    /// The command this control dispatches.
    pub fn command(&self) -> ToggleCommand {
        ToggleCommand {
            target: self.target,
        }
    }
}

impl PolicyStore {
    /// Build the toggle for `target` from its current policy.
    pub fn toggle_control(&mut self, panel: InspectionPanel, target: EntityId) -> ToggleControl {
        let active = self.show_warning(target);
        ToggleControl {
            panel,
            target,
            active,
            label_key: if active { LABEL_SHOWING } else { LABEL_HIDING },
            description_key: DESCRIPTION,
            icon_path: ICON_PATH,
        }
    }

    /// Apply a toggle command; returns the new `show_warning`.
    pub fn dispatch(&mut self, command: ToggleCommand) -> bool {
        self.toggle(command.target)
    }
}
