//! Patcher errors

use thiserror::Error;

/// Engine-level failures. Per-target problems are [`SkipReason`]s, not
/// errors.
///
/// [`SkipReason`]: crate::domain::SkipReason
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("Invalid patch state transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}
