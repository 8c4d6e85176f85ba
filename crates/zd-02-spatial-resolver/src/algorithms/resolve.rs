//! Container resolution
//!
//! Every function tolerates a missing map or cell by returning `None`.

use shared_types::{Cell, ContainerRef, ThingRef};
use tracing::trace;

use crate::ports::{MapProvider, SpatialIndex};

/// Storage building occupying `cell`, ignoring any other building there.
pub fn resolve_storage(cell: Option<Cell>, map: Option<&dyn SpatialIndex>) -> Option<ContainerRef> {
    let (cell, map) = (cell?, map?);
    map.thing_at(cell)
        .filter(|object| object.storage)
        .map(ContainerRef::from)
}

/// Zone covering `cell`.
pub fn resolve_zone(cell: Option<Cell>, map: Option<&dyn SpatialIndex>) -> Option<ContainerRef> {
    let (cell, map) = (cell?, map?);
    map.zone_at(cell).map(ContainerRef::from)
}

/// The container whose policy governs `cell`: storage first, then zone.
pub fn resolve_container(
    cell: Option<Cell>,
    map: Option<&dyn SpatialIndex>,
) -> Option<ContainerRef> {
    let resolved = resolve_storage(cell, map).or_else(|| resolve_zone(cell, map));
    trace!(
        cell = ?cell,
        container = ?resolved.as_ref().map(|c| (c.kind, c.id)),
        "[zd-02] Resolved container"
    );
    resolved
}

/// Container enclosing a spawned thing, looking its map up through `maps`.
pub fn resolve_thing(thing: &ThingRef, maps: &dyn MapProvider) -> Option<ContainerRef> {
    let map = thing.map.and_then(|id| maps.map(id));
    resolve_container(thing.cell, map)
}

/// Container storing a spawned thing: a storage building, else a stockpile
/// zone. Zones that hold no items never count.
pub fn resolve_stored(thing: &ThingRef, maps: &dyn MapProvider) -> Option<ContainerRef> {
    let map = thing.map.and_then(|id| maps.map(id));
    resolve_storage(thing.cell, map).or_else(|| {
        let (cell, map) = (thing.cell?, map?);
        map.zone_at(cell)
            .filter(|zone| zone.storage)
            .map(ContainerRef::from)
    })
}
