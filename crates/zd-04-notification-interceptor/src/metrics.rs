//! Metrics hooks for intercept decisions
//!
//! Counts what the interceptor saw and decided, so an operator can confirm
//! from a debug dump that suppression is actually happening.
//!
//! ## Usage
//!
//! ```ignore
//! use zd_04_notification_interceptor::metrics::Metrics;
//!
//! let metrics = Metrics::new();
//! metrics.record_decision(&outcome, start.elapsed());
//! let snapshot = metrics.snapshot();
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use shared_types::Verdict;

use crate::domain::{DecisionReason, InterceptOutcome};

/// Counters for intercept decisions.
#[derive(Default)]
pub struct Metrics {
    /// Notifications seen
    pub inspected: AtomicU64,
    /// Notifications that matched a fingerprint
    pub fingerprint_hits: AtomicU64,
    /// Tracked notifications with no usable location or container
    pub unresolved: AtomicU64,
    /// Notifications vetoed
    pub suppressed: AtomicU64,
    /// Notifications let through
    pub allowed: AtomicU64,
    /// Cumulative decision time in nanoseconds
    pub decision_time_ns: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one decision.
    pub fn record_decision(&self, outcome: &InterceptOutcome, duration: Duration) {
        self.inspected.fetch_add(1, Ordering::Relaxed);
        self.decision_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);

        if outcome.was_tracked() {
            self.fingerprint_hits.fetch_add(1, Ordering::Relaxed);
        }
        if matches!(
            outcome.reason,
            DecisionReason::UnresolvableLocation | DecisionReason::NoContainer
        ) {
            self.unresolved.fetch_add(1, Ordering::Relaxed);
        }
        match outcome.verdict {
            Verdict::Allow => self.allowed.fetch_add(1, Ordering::Relaxed),
            Verdict::Suppress => self.suppressed.fetch_add(1, Ordering::Relaxed),
        };
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            inspected: self.inspected.load(Ordering::Relaxed),
            fingerprint_hits: self.fingerprint_hits.load(Ordering::Relaxed),
            unresolved: self.unresolved.load(Ordering::Relaxed),
            suppressed: self.suppressed.load(Ordering::Relaxed),
            allowed: self.allowed.load(Ordering::Relaxed),
            avg_decision_ns: self.avg_decision_time_ns(),
        }
    }

    /// Average decision time in nanoseconds
    pub fn avg_decision_time_ns(&self) -> u64 {
        let total = self.decision_time_ns.load(Ordering::Relaxed);
        let count = self.inspected.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.inspected.store(0, Ordering::Relaxed);
        self.fingerprint_hits.store(0, Ordering::Relaxed);
        self.unresolved.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.allowed.store(0, Ordering::Relaxed);
        self.decision_time_ns.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub inspected: u64,
    pub fingerprint_hits: u64,
    pub unresolved: u64,
    pub suppressed: u64,
    pub allowed: u64,
    pub avg_decision_ns: u64,
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder {
    /// Record one intercept decision
    fn record_decision(&self, outcome: &InterceptOutcome, duration: Duration);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_decision(&self, _: &InterceptOutcome, _: Duration) {}
}

impl MetricsRecorder for Metrics {
    fn record_decision(&self, outcome: &InterceptOutcome, duration: Duration) {
        Metrics::record_decision(self, outcome, duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{ContainerKind, ContainerRef, EntityId};

    fn zone() -> ContainerRef {
        ContainerRef {
            kind: ContainerKind::Zone,
            id: EntityId(2),
            label: "Stockpile zone 1".to_string(),
        }
    }

    #[test]
    fn test_metrics_initialization() {
        let snapshot = Metrics::new().snapshot();
        assert_eq!(snapshot, MetricsSnapshot::default());
    }

    #[test]
    fn test_record_decisions() {
        let metrics = Metrics::new();
        let d = Duration::from_nanos(100);

        metrics.record_decision(&InterceptOutcome::allow(DecisionReason::NotTracked), d);
        metrics.record_decision(&InterceptOutcome::allow(DecisionReason::NoContainer), d);
        metrics.record_decision(&InterceptOutcome::from_policy(zone(), false), d);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.inspected, 3);
        assert_eq!(snapshot.fingerprint_hits, 2);
        assert_eq!(snapshot.unresolved, 1);
        assert_eq!(snapshot.suppressed, 1);
        assert_eq!(snapshot.allowed, 2);
        assert_eq!(snapshot.avg_decision_ns, 100);
    }

    #[test]
    fn test_reset() {
        let metrics = Metrics::new();
        metrics.record_decision(
            &InterceptOutcome::from_policy(zone(), true),
            Duration::from_nanos(5),
        );
        metrics.reset();
        assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_noop_metrics() {
        let noop = NoOpMetrics;
        noop.record_decision(
            &InterceptOutcome::allow(DecisionReason::NotTracked),
            Duration::from_nanos(1),
        );
    }
}
