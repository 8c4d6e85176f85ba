//! # Error Types
//!
//! Failures reported by the host runtime at the extension boundary.

use thiserror::Error;

/// Errors surfaced by host-provided ports (rendering, persistence, method
/// access).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// A template could not be rendered with the supplied arguments.
    #[error("Template render failed for {key}: {reason}")]
    RenderFailed { key: String, reason: String },

    /// The requested method does not exist in the loaded host assembly.
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// The host refused to install a rewritten method body.
    #[error("Install rejected for {method}: {reason}")]
    InstallRejected { method: String, reason: String },

    /// A persistence section could not be read or written.
    #[error("Persistence error: {0}")]
    Persistence(String),
}
