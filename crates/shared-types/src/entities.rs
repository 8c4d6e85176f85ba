//! # Core Host Entities
//!
//! Identifiers and spatial primitives owned by the host runtime.
//!
//! ## Clusters
//!
//! - **Identity**: `EntityId`, `MapId`
//! - **Space**: `Cell`
//! - **Containers**: `HostObject`, `HostZone`, `ContainerKind`, `ContainerRef`
//! - **Receivers**: `ThingRef`

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Integer identifier assigned by the host to a trackable object.
///
/// Stable for the object's lifetime and not reused while the object exists.
/// Things and zones share this id space as far as the policy store is
/// concerned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct EntityId(pub i32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<i32> for EntityId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Identifier of a loaded map inside the host world.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct MapId(pub u32);

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map-{}", self.0)
    }
}

// =============================================================================
// CLUSTER B: SPACE
// =============================================================================

/// A grid cell on a map (the host's integer 3-vector; `y` is altitude and is
/// always zero for ground cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cell {
    /// Ground-level cell at `(x, z)`.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, y: 0, z }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// =============================================================================
// CLUSTER C: CONTAINERS
// =============================================================================

/// An object the host reports as occupying a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostObject {
    /// Host-assigned identifier.
    pub id: EntityId,
    /// Display label.
    pub label: String,
    /// Whether the object is a storage-type building (shelf, bin, ...).
    pub storage: bool,
}

impl HostObject {
    /// A storage-type building.
    pub fn storage(id: impl Into<EntityId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            storage: true,
        }
    }

    /// Any other building.
    pub fn building(id: impl Into<EntityId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            storage: false,
        }
    }
}

/// A zone region reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostZone {
    /// Host-assigned identifier.
    pub id: EntityId,
    /// Display label.
    pub label: String,
    /// Whether the zone holds items (stockpile, dumping zone).
    #[serde(default)]
    pub storage: bool,
}

impl HostZone {
    /// A zone that does not store items (growing zone, animal area, ...).
    pub fn new(id: impl Into<EntityId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            storage: false,
        }
    }

    /// A stockpile-type zone.
    pub fn stockpile(id: impl Into<EntityId>, label: impl Into<String>) -> Self {
        Self {
            storage: true,
            ..Self::new(id, label)
        }
    }
}

/// Kind of spatial container a policy can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerKind {
    /// A storage building occupying the cell.
    StorageContainer,
    /// A zone region covering the cell.
    Zone,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::StorageContainer => write!(f, "storage"),
            ContainerKind::Zone => write!(f, "zone"),
        }
    }
}

/// The container enclosing a location, as resolved from the host indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRef {
    pub kind: ContainerKind,
    pub id: EntityId,
    pub label: String,
}

impl From<HostObject> for ContainerRef {
    fn from(object: HostObject) -> Self {
        Self {
            kind: ContainerKind::StorageContainer,
            id: object.id,
            label: object.label,
        }
    }
}

impl From<HostZone> for ContainerRef {
    fn from(zone: HostZone) -> Self {
        Self {
            kind: ContainerKind::Zone,
            id: zone.id,
            label: zone.label,
        }
    }
}

// =============================================================================
// CLUSTER D: RECEIVERS
// =============================================================================

/// The receiver of a patched host method (the thing that is rotting, the
/// plant that died, ...).
///
/// `cell` and `map` are `None` while the thing is unspawned or carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThingRef {
    pub id: EntityId,
    pub label: String,
    pub cell: Option<Cell>,
    pub map: Option<MapId>,
}

impl ThingRef {
    /// A thing spawned at `cell` on `map`.
    pub fn spawned(id: impl Into<EntityId>, label: impl Into<String>, cell: Cell, map: MapId) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            cell: Some(cell),
            map: Some(map),
        }
    }
}
