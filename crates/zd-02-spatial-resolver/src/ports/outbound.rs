//! # Outbound Ports
//!
//! Host-provided spatial indices: the per-map thing grid and zone manager,
//! and the world's map list.

use std::collections::HashMap;

use shared_types::{Cell, EntityId, HostObject, HostZone, MapId};

/// Spatial index of one host map - outbound port.
pub trait SpatialIndex {
    /// Identifier of the indexed map.
    fn map_id(&self) -> MapId;

    /// Building occupying `cell`, if any.
    fn thing_at(&self, cell: Cell) -> Option<HostObject>;

    /// Zone covering `cell`, if any.
    fn zone_at(&self, cell: Cell) -> Option<HostZone>;
}

/// Lookup from map id to its spatial index - outbound port.
pub trait MapProvider {
    fn map(&self, id: MapId) -> Option<&dyn SpatialIndex>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// In-memory map for testing.
#[derive(Debug, Clone, Default)]
pub struct MockSpatialIndex {
    /// Map identifier.
    pub id: MapId,
    /// Buildings by cell.
    pub things: HashMap<Cell, HostObject>,
    /// Zones by covered cell.
    pub zones: HashMap<Cell, HostZone>,
}

impl MockSpatialIndex {
    pub fn new(id: MapId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Place a storage building.
    pub fn with_storage(mut self, cell: Cell, id: i32, label: &str) -> Self {
        self.things.insert(cell, HostObject::storage(id, label));
        self
    }

    /// Place a non-storage building.
    pub fn with_building(mut self, cell: Cell, id: i32, label: &str) -> Self {
        self.things.insert(cell, HostObject::building(id, label));
        self
    }

    /// Add a non-storage zone covering `cells`.
    pub fn with_zone(self, id: i32, label: &str, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.with_host_zone(HostZone::new(EntityId(id), label), cells)
    }

    /// Add a stockpile zone covering `cells`.
    pub fn with_stockpile(
        self,
        id: i32,
        label: &str,
        cells: impl IntoIterator<Item = Cell>,
    ) -> Self {
        self.with_host_zone(HostZone::stockpile(EntityId(id), label), cells)
    }

    fn with_host_zone(mut self, zone: HostZone, cells: impl IntoIterator<Item = Cell>) -> Self {
        for cell in cells {
            self.zones.insert(cell, zone.clone());
        }
        self
    }
}

impl SpatialIndex for MockSpatialIndex {
    fn map_id(&self) -> MapId {
        self.id
    }

    fn thing_at(&self, cell: Cell) -> Option<HostObject> {
        self.things.get(&cell).cloned()
    }

    fn zone_at(&self, cell: Cell) -> Option<HostZone> {
        self.zones.get(&cell).cloned()
    }
}

/// In-memory world holding several maps.
#[derive(Debug, Clone, Default)]
pub struct MockWorld {
    pub maps: HashMap<MapId, MockSpatialIndex>,
}

impl MockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_map(mut self, map: MockSpatialIndex) -> Self {
        self.maps.insert(map.id, map);
        self
    }
}

impl MapProvider for MockWorld {
    fn map(&self, id: MapId) -> Option<&dyn SpatialIndex> {
        self.maps.get(&id).map(|map| map as &dyn SpatialIndex)
    }
}
