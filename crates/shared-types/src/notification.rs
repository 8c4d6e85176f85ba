//! # Notification Envelope
//!
//! The arguments of the host's single outgoing-notification entrypoint and
//! the veto decision returned to it.

use crate::entities::{Cell, EntityId, MapId};
use serde::{Deserialize, Serialize};

/// Host message category (letter/message colouring and sound).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MessageType {
    #[default]
    NeutralEvent,
    NegativeEvent,
    PositiveEvent,
    ThreatSmall,
    ThreatBig,
    CautionInput,
    RejectInput,
    SilentInput,
    TaskCompletion,
}

/// One thing a notification points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookTarget {
    /// A thing; `cell`/`map` are absent when the thing is not spawned.
    Thing {
        id: EntityId,
        cell: Option<Cell>,
        map: Option<MapId>,
    },
    /// A bare cell on a map.
    Cell { cell: Cell, map: MapId },
}

impl LookTarget {
    /// Cell and map of the target, when both are known.
    pub fn location(&self) -> Option<(Cell, MapId)> {
        match self {
            LookTarget::Thing {
                cell: Some(cell),
                map: Some(map),
                ..
            } => Some((*cell, *map)),
            LookTarget::Thing { .. } => None,
            LookTarget::Cell { cell, map } => Some((*cell, *map)),
        }
    }
}

/// Ordered set of targets; the first one is the primary subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LookTargets(pub Vec<LookTarget>);

impl LookTargets {
    /// No targets at all.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// A single target.
    pub fn single(target: LookTarget) -> Self {
        Self(vec![target])
    }

    /// The primary subject, if any.
    pub fn primary(&self) -> Option<&LookTarget> {
        self.0.first()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Arguments of one host notification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Fully rendered text.
    pub text: String,
    pub targets: LookTargets,
    pub category: MessageType,
    /// Whether the host records the message in its history log.
    pub historical: bool,
}

impl Notification {
    pub fn new(text: impl Into<String>, targets: LookTargets, category: MessageType) -> Self {
        Self {
            text: text.into(),
            targets,
            category,
            historical: true,
        }
    }
}

/// Decision returned to a hooked host entrypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Let the host deliver the notification.
    Allow,
    /// Veto delivery.
    Suppress,
}

impl Verdict {
    pub fn is_allowed(self) -> bool {
        matches!(self, Verdict::Allow)
    }
}

/// Hook convention: `true` lets the original host method run.
impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.is_allowed()
    }
}
