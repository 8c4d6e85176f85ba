//! Runtime errors

use thiserror::Error;
use zd_01_policy_store::PolicyStoreError;
use zd_telemetry::TelemetryError;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no notification templates are tracked")]
    NoTrackedTemplates,

    #[error("tracked template keys must not be empty")]
    EmptyTemplateKey,

    #[error("min_fingerprint_len must be at least 1")]
    ZeroMinFingerprintLen,

    #[error("sample subject attributes must not be empty")]
    EmptySampleSubject,
}

/// Errors surfaced to the host's bootstrap and session hooks.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("telemetry: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("policy store: {0}")]
    PolicyStore(#[from] PolicyStoreError),
}
