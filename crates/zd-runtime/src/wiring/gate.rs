//! Deterioration gate
//!
//! Runs before the host applies deterioration damage and may clear its
//! "send message" flag. The damage itself always goes ahead.

use shared_types::Cell;
use tracing::debug;
use zd_01_policy_store::PolicyStore;
use zd_02_spatial_resolver::{resolve_zone, SpatialIndex};

/// Clear `send_message` when the zone at `cell` hides warnings. A missing
/// cell or map leaves it untouched.
pub fn deterioration_gate(
    cell: Option<Cell>,
    map: Option<&dyn SpatialIndex>,
    store: &mut PolicyStore,
    send_message: &mut bool,
) {
    let Some(zone) = resolve_zone(cell, map) else {
        return;
    };
    if !store.show_warning(zone.id) {
        debug!(zone = %zone.id, "[zd] Deterioration message muted by zone policy");
        *send_message = false;
    }
}
