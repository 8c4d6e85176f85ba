//! Intercept decision and its reason

use shared_types::{ContainerRef, Verdict};

/// Why the interceptor reached its verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionReason {
    /// The text matches no fingerprint.
    NotTracked,
    /// Tracked, but the primary target has no cell/map (or the map is not
    /// loaded).
    UnresolvableLocation,
    /// Tracked, located, but open ground.
    NoContainer,
    /// The container's policy shows warnings.
    PolicyShows(ContainerRef),
    /// The container's policy hides warnings.
    PolicyHides(ContainerRef),
}

/// Verdict plus reason for one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptOutcome {
    pub verdict: Verdict,
    pub reason: DecisionReason,
}

impl InterceptOutcome {
    pub fn allow(reason: DecisionReason) -> Self {
        Self {
            verdict: Verdict::Allow,
            reason,
        }
    }

    pub fn from_policy(container: ContainerRef, show_warning: bool) -> Self {
        if show_warning {
            Self::allow(DecisionReason::PolicyShows(container))
        } else {
            Self {
                verdict: Verdict::Suppress,
                reason: DecisionReason::PolicyHides(container),
            }
        }
    }

    /// Whether the decision got past the fingerprint check.
    pub fn was_tracked(&self) -> bool {
        !matches!(self.reason, DecisionReason::NotTracked)
    }
}
