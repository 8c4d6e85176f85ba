//! Notification Interceptor
//!
//! Orchestrates fingerprint matching, container resolution and policy
//! lookup for each outgoing host notification.

use std::sync::Arc;
use std::time::{Duration, Instant};

use shared_types::{LookTargets, MessageType, Notification};
use tracing::{debug, info, trace};
use zd_01_policy_store::PolicyStore;
use zd_02_spatial_resolver::{resolve_container, MapProvider};
use zd_03_fingerprint_registry::FingerprintRegistry;

use crate::domain::{DecisionReason, InterceptOutcome};
use crate::error::InterceptorError;
use crate::metrics::{Metrics, MetricsRecorder};

/// Hook installed on the host's notification entrypoint.
///
/// Holds the read-only fingerprint registry; the session's policy store and
/// map provider are passed in on every call.
pub struct NotificationInterceptor<M: MetricsRecorder = Metrics> {
    registry: Arc<FingerprintRegistry>,
    metrics: M,
}

impl NotificationInterceptor<Metrics> {
    /// Install over a built registry.
    ///
    /// Fails when the registry has no fingerprints: the hook would never do
    /// anything and most likely the registry build went wrong.
    pub fn new(registry: Arc<FingerprintRegistry>) -> Result<Self, InterceptorError> {
        Self::with_recorder(registry, Metrics::new())
    }
}

impl<M: MetricsRecorder> NotificationInterceptor<M> {
    /// Install with a custom metrics recorder.
    pub fn with_recorder(
        registry: Arc<FingerprintRegistry>,
        metrics: M,
    ) -> Result<Self, InterceptorError> {
        if registry.is_empty() {
            return Err(InterceptorError::EmptyRegistry);
        }
        info!(
            fingerprints = registry.len(),
            "[zd-04] Notification interceptor installed"
        );
        Ok(Self { registry, metrics })
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    pub fn registry(&self) -> &FingerprintRegistry {
        &self.registry
    }

    /// Decide whether `notification` may be delivered.
    pub fn intercept(
        &self,
        notification: &Notification,
        maps: &dyn MapProvider,
        store: &mut PolicyStore,
    ) -> InterceptOutcome {
        self.evaluate(&notification.text, &notification.targets, maps, store)
    }

    /// Hook-shaped entrypoint mirroring the host signature; `true` lets the
    /// host deliver the message.
    pub fn on_message(
        &self,
        text: &str,
        targets: &LookTargets,
        _category: MessageType,
        _historical: bool,
        maps: &dyn MapProvider,
        store: &mut PolicyStore,
    ) -> bool {
        self.evaluate(text, targets, maps, store).verdict.into()
    }

    /// Untracked text returns before any lookup and is recorded with zero
    /// decision time.
    fn evaluate(
        &self,
        text: &str,
        targets: &LookTargets,
        maps: &dyn MapProvider,
        store: &mut PolicyStore,
    ) -> InterceptOutcome {
        if !self.registry.matches(text) {
            let outcome = InterceptOutcome::allow(DecisionReason::NotTracked);
            self.metrics.record_decision(&outcome, Duration::ZERO);
            return outcome;
        }

        let start = Instant::now();
        let outcome = Self::decide(targets, maps, store);
        self.metrics.record_decision(&outcome, start.elapsed());

        match &outcome.reason {
            DecisionReason::PolicyHides(container) => debug!(
                container = %container.id,
                kind = %container.kind,
                "[zd-04] Suppressed notification: {}",
                text
            ),
            reason => trace!(reason = ?reason, "[zd-04] Allowed tracked notification"),
        }

        outcome
    }

    fn decide(
        targets: &LookTargets,
        maps: &dyn MapProvider,
        store: &mut PolicyStore,
    ) -> InterceptOutcome {
        let located = targets
            .primary()
            .and_then(|target| target.location())
            .and_then(|(cell, map_id)| maps.map(map_id).map(|map| (cell, map)));
        let Some((cell, map)) = located else {
            return InterceptOutcome::allow(DecisionReason::UnresolvableLocation);
        };

        let Some(container) = resolve_container(Some(cell), Some(map)) else {
            return InterceptOutcome::allow(DecisionReason::NoContainer);
        };

        let show_warning = store.show_warning(container.id);
        InterceptOutcome::from_policy(container, show_warning)
    }
}
