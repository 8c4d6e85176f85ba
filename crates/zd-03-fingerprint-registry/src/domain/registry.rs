//! Read-only fingerprint registry

use super::fingerprint::Fingerprint;
use super::template::TemplateKey;

/// Fingerprints of every tracked template that rendered successfully.
///
/// Built once by `RegistryBuilder`; there is no way to add entries later.
#[derive(Debug, Clone, Default)]
pub struct FingerprintRegistry {
    entries: Vec<(TemplateKey, Fingerprint)>,
}

impl FingerprintRegistry {
    pub(crate) fn from_entries(entries: Vec<(TemplateKey, Fingerprint)>) -> Self {
        Self { entries }
    }

    /// True iff `text` contains any fingerprint.
    pub fn matches(&self, text: &str) -> bool {
        self.matching_category(text).is_some()
    }

    /// First template whose fingerprint occurs in `text`.
    pub fn matching_category(&self, text: &str) -> Option<&TemplateKey> {
        self.entries
            .iter()
            .find(|(_, fingerprint)| fingerprint.is_found_in(text))
            .map(|(key, _)| key)
    }

    /// Fingerprint recorded for `key`.
    pub fn fingerprint(&self, key: &TemplateKey) -> Option<&Fingerprint> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, fingerprint)| fingerprint)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &TemplateKey> {
        self.entries.iter().map(|(key, _)| key)
    }
}
