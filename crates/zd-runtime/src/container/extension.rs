//! # Extension Bootstrap
//!
//! Process-level state: the patch ledger, the notification interceptor and
//! the predicate table. Built once when the host loads the extension.
//!
//! Order matters: host methods are patched before anything else, and the
//! interceptor is only installed over a non-empty fingerprint registry.

use std::sync::Arc;

use shared_types::{Notification, ThingRef, Verdict};
use tracing::{info, warn};
use zd_02_spatial_resolver::MapProvider;
use zd_03_fingerprint_registry::{RegistryBuilder, TemplateRenderer};
use zd_04_notification_interceptor::NotificationInterceptor;
use zd_05_instruction_patcher::{MethodRef, MethodRepository, PatchEngine, PatchRecord};
use zd_telemetry::{init_telemetry, log_event, subsystem_span, TelemetryGuard};

use super::config::ExtensionConfig;
use super::session::SessionContext;
use crate::error::RuntimeError;
use crate::wiring::{default_targets, PredicateTable};

/// The loaded extension.
pub struct Extension {
    config: ExtensionConfig,
    patcher: PatchEngine,
    interceptor: Option<NotificationInterceptor>,
    predicates: PredicateTable,
}

impl Extension {
    /// Patch host methods, build the fingerprint registry and install the
    /// interceptor.
    ///
    /// Only an invalid configuration fails. Patch and template problems are
    /// logged and leave the affected feature off.
    pub fn bootstrap(
        config: ExtensionConfig,
        repo: &mut dyn MethodRepository,
        renderer: &dyn TemplateRenderer,
    ) -> Result<Self, RuntimeError> {
        config.validate()?;
        let _span = subsystem_span!("bootstrap", subsystem = "zd").entered();
        info!(
            templates = config.tracked_templates.len(),
            patching = config.patching_enabled,
            "[zd] Bootstrapping extension"
        );

        let mut patcher = PatchEngine::new(default_targets());
        if config.patching_enabled {
            patcher.run(repo);
        } else {
            info!("[zd] Method patching disabled by configuration");
        }

        let (registry, report) = RegistryBuilder::new()
            .categories(config.tracked_templates.iter().cloned())
            .sample_subject(config.sample_subject.clone())
            .min_fingerprint_len(config.min_fingerprint_len)
            .build(renderer);

        let interceptor = match NotificationInterceptor::new(Arc::new(registry)) {
            Ok(interceptor) => Some(interceptor),
            Err(e) => {
                log_event!(
                    warn,
                    "zd",
                    "[zd] Notification interceptor not installed",
                    error = %e,
                    skipped = report.skipped.len()
                );
                None
            }
        };

        info!(
            spliced = patcher.spliced_count(),
            patches = patcher.ledger().len(),
            fingerprints = report.registered.len(),
            intercepting = interceptor.is_some(),
            "[zd] Extension ready"
        );

        Ok(Self {
            config,
            patcher,
            interceptor,
            predicates: PredicateTable::default(),
        })
    }

    /// Install the logging stack described by the configuration.
    pub fn init_telemetry(config: &ExtensionConfig) -> Result<TelemetryGuard, RuntimeError> {
        Ok(init_telemetry(config.telemetry.clone())?)
    }

    pub fn config(&self) -> &ExtensionConfig {
        &self.config
    }

    /// Outcome of every patch target.
    pub fn patches(&self) -> &[PatchRecord] {
        self.patcher.ledger()
    }

    pub fn interceptor(&self) -> Option<&NotificationInterceptor> {
        self.interceptor.as_ref()
    }

    pub fn is_intercepting(&self) -> bool {
        self.interceptor.is_some()
    }

    pub fn predicates(&self) -> &PredicateTable {
        &self.predicates
    }

    /// Hook on the host's notification entrypoint. Allows everything when
    /// the interceptor is not installed.
    pub fn on_message(
        &self,
        notification: &Notification,
        maps: &dyn MapProvider,
        session: &mut SessionContext,
    ) -> Verdict {
        match &self.interceptor {
            Some(interceptor) => {
                interceptor
                    .intercept(notification, maps, session.store_mut())
                    .verdict
            }
            None => Verdict::Allow,
        }
    }

    /// Entry for a patched method calling `method`. Unknown methods answer
    /// `true` so the host keeps its stock behavior.
    pub fn call_predicate(
        &self,
        method: &MethodRef,
        subject: &ThingRef,
        maps: &dyn MapProvider,
        session: &mut SessionContext,
    ) -> bool {
        match self
            .predicates
            .invoke(method, subject, maps, session.store_mut())
        {
            Some(result) => result,
            None => {
                warn!(method = %method, "[zd] No predicate registered");
                true
            }
        }
    }
}
