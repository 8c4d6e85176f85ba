//! Per-job state machine and ledger records

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ir::MethodSignature;
use super::target::{CallPattern, PatchTarget};
use crate::error::PatchError;

/// Why a job installed nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SkipReason {
    #[error("call pattern `{pattern}` not found")]
    PatternNotFound { pattern: String },

    #[error("window [-{before}, +{after}] around index {at} exceeds {len} instructions")]
    WindowOutOfBounds {
        at: usize,
        before: usize,
        after: usize,
        len: usize,
    },

    #[error("window must end after the matched call (after = {after})")]
    InvalidWindow { after: usize },

    #[error("method body unavailable: {0}")]
    MethodNotFound(String),

    #[error("host rejected the rewritten body: {0}")]
    InstallFailed(String),

    #[error("patch job aborted: {0}")]
    Aborted(String),
}

/// Lifecycle of a single patch job.
///
/// `Unpatched -> Scanning -> {Spliced | Skipped}`. Both end states are
/// terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PatchState {
    #[default]
    Unpatched,
    Scanning,
    /// Installed; `at` is the matched index, `inserted` the number of
    /// instructions added.
    Spliced { at: usize, inserted: usize },
    Skipped(SkipReason),
}

impl PatchState {
    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: &PatchState) -> bool {
        matches!(
            (self, next),
            (Self::Unpatched, Self::Scanning)
                | (Self::Scanning, Self::Spliced { .. })
                | (Self::Scanning, Self::Skipped(_))
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Spliced { .. } | Self::Skipped(_))
    }

    pub fn is_spliced(&self) -> bool {
        matches!(self, Self::Spliced { .. })
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Unpatched => "Unpatched",
            Self::Scanning => "Scanning",
            Self::Spliced { .. } => "Spliced",
            Self::Skipped(_) => "Skipped",
        }
    }
}

impl fmt::Display for PatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spliced { at, inserted } => {
                write!(f, "Spliced(at {}, +{})", at, inserted)
            }
            Self::Skipped(reason) => write!(f, "Skipped({})", reason),
            other => f.write_str(other.name()),
        }
    }
}

/// A patch target moving through its lifecycle.
#[derive(Debug, Clone)]
pub struct PatchJob {
    target: PatchTarget,
    state: PatchState,
}

impl PatchJob {
    pub fn new(target: PatchTarget) -> Self {
        Self {
            target,
            state: PatchState::Unpatched,
        }
    }

    pub fn target(&self) -> &PatchTarget {
        &self.target
    }

    pub fn state(&self) -> &PatchState {
        &self.state
    }

    /// Transition to new state.
    pub fn transition_to(&mut self, next: PatchState) -> Result<(), PatchError> {
        if !self.state.can_transition_to(&next) {
            return Err(PatchError::InvalidTransition {
                from: self.state.name().to_string(),
                to: next.name().to_string(),
            });
        }
        self.state = next;
        Ok(())
    }

    pub fn into_record(self) -> PatchRecord {
        PatchRecord {
            method: self.target.method,
            pattern: self.target.pattern,
            strategy: self.target.strategy.name().to_string(),
            state: self.state,
        }
    }
}

/// Ledger entry for one finished job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchRecord {
    pub method: MethodSignature,
    pub pattern: CallPattern,
    pub strategy: String,
    pub state: PatchState,
}

impl PatchRecord {
    pub fn is_spliced(&self) -> bool {
        self.state.is_spliced()
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match &self.state {
            PatchState::Skipped(reason) => Some(reason),
            _ => None,
        }
    }
}
