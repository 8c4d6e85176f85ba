//! # ZD-02 Spatial Resolver
//!
//! Maps a cell on a host map to the container whose policy applies there.
//!
//! **Subsystem ID:** 02
//! **Architecture:** Hexagonal (Algorithms + Ports)
//!
//! ## Resolution Order
//!
//! 1. A storage-type building occupying the cell.
//! 2. Otherwise, a zone covering the cell.
//! 3. Otherwise, nothing (open ground).
//!
//! A shelf standing inside a stockpile is governed by the shelf's policy.
//! `resolve_stored` applies the same order but only accepts zones that
//! hold items, answering "is this thing in storage".
//!
//! ## Module Structure
//!
//! ```text
//! zd-02-spatial-resolver/
//! ├── algorithms/      # resolve_container, resolve_stored, resolve_zone, ...
//! └── ports/           # SpatialIndex, MapProvider (+ mocks)
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod algorithms;
pub mod ports;

pub use algorithms::{
    resolve_container, resolve_storage, resolve_stored, resolve_thing, resolve_zone,
};
pub use ports::{MapProvider, MockSpatialIndex, MockWorld, SpatialIndex};
