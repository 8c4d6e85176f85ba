//! Error types for the Fingerprint Registry subsystem

use shared_types::HostError;
use thiserror::Error;

/// Reasons a single category contributes no fingerprint.
///
/// These are recorded in the build report and logged; they never abort a
/// build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Template {key} failed to render: {source}")]
    TemplateRender {
        key: String,
        #[source]
        source: HostError,
    },

    #[error("Template {key} leaves no usable invariant text (longest fragment {fragment:?})")]
    DegenerateFingerprint { key: String, fragment: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_message_names_key() {
        let err = RegistryError::DegenerateFingerprint {
            key: "MessageX".to_string(),
            fragment: ".".to_string(),
        };
        assert!(err.to_string().contains("MessageX"));
    }
}
