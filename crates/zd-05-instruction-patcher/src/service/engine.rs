//! Patch Engine
//!
//! Applies each [`PatchTarget`] exactly once: fetch, scan, splice, install.
//! Every per-target failure becomes a `Skipped` ledger entry; nothing is
//! raised to the caller.

use tracing::{error, info, warn};
use zd_telemetry::{log_patch_event, subsystem_span};

use crate::algorithms::splice;
use crate::domain::{PatchJob, PatchRecord, PatchState, PatchTarget, SkipReason};
use crate::error::PatchError;
use crate::ports::MethodRepository;

/// Load-time patcher over a fixed target list.
#[derive(Debug, Clone, Default)]
pub struct PatchEngine {
    targets: Vec<PatchTarget>,
    ledger: Vec<PatchRecord>,
    has_run: bool,
}

impl PatchEngine {
    pub fn new(targets: Vec<PatchTarget>) -> Self {
        Self {
            targets,
            ledger: Vec::new(),
            has_run: false,
        }
    }

    pub fn targets(&self) -> &[PatchTarget] {
        &self.targets
    }

    pub fn ledger(&self) -> &[PatchRecord] {
        &self.ledger
    }

    pub fn has_run(&self) -> bool {
        self.has_run
    }

    /// Number of targets that ended `Spliced`.
    pub fn spliced_count(&self) -> usize {
        self.ledger.iter().filter(|r| r.is_spliced()).count()
    }

    /// Apply every target. Later calls do nothing and return the existing
    /// ledger.
    pub fn run(&mut self, repo: &mut dyn MethodRepository) -> &[PatchRecord] {
        if self.has_run {
            warn!(
                records = self.ledger.len(),
                "[zd-05] Patch engine already ran, ignoring"
            );
            return &self.ledger;
        }
        self.has_run = true;
        let _span = subsystem_span!("patch_engine", subsystem = "zd-05").entered();

        info!(targets = self.targets.len(), "[zd-05] Patching host methods");
        for target in &self.targets {
            let record = match apply(target, repo) {
                Ok(record) => record,
                Err(e) => {
                    error!(method = %target.method, error = %e, "[zd-05] Patch job aborted");
                    abandoned(target, e)
                }
            };
            self.ledger.push(record);
        }

        info!(
            spliced = self.spliced_count(),
            skipped = self.ledger.len() - self.spliced_count(),
            "[zd-05] Patching complete"
        );
        &self.ledger
    }
}

fn apply(target: &PatchTarget, repo: &mut dyn MethodRepository) -> Result<PatchRecord, PatchError> {
    let mut job = PatchJob::new(target.clone());
    log_patch_event!(
        info,
        "[zd-05] Patch started",
        target.method,
        pattern = %target.pattern,
        strategy = target.strategy.name()
    );
    job.transition_to(PatchState::Scanning)?;

    let next = match repo.method_body(&target.method) {
        Err(e) => PatchState::Skipped(SkipReason::MethodNotFound(e.to_string())),
        Ok(body) => match splice(&body, &target.pattern, &target.strategy) {
            Err(reason) => PatchState::Skipped(reason),
            Ok(outcome) => {
                let (at, inserted) = (outcome.at, outcome.inserted);
                match repo.install_body(outcome.body) {
                    Ok(()) => PatchState::Spliced { at, inserted },
                    Err(e) => PatchState::Skipped(SkipReason::InstallFailed(e.to_string())),
                }
            }
        },
    };

    match &next {
        PatchState::Skipped(reason) => log_patch_event!(
            warn,
            "[zd-05] Patch skipped, host behavior left unchanged",
            target.method,
            pattern = %target.pattern,
            reason = %reason
        ),
        _ => log_patch_event!(
            info,
            "[zd-05] Patch applied",
            target.method,
            predicate = %target.strategy.predicate(),
            state = %next
        ),
    }
    job.transition_to(next)?;

    Ok(job.into_record())
}

fn abandoned(target: &PatchTarget, e: PatchError) -> PatchRecord {
    PatchRecord {
        method: target.method.clone(),
        pattern: target.pattern.clone(),
        strategy: target.strategy.name().to_string(),
        state: PatchState::Skipped(SkipReason::Aborted(e.to_string())),
    }
}
