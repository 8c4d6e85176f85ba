//! Algorithms Layer
//!
//! Pure scan and splice over instruction sequences.

pub mod scan;
pub mod splice;

pub use scan::scan;
pub use splice::{splice, SpliceOutcome};
