//! Registry Builder
//!
//! Renders each tracked template with a synthetic subject and derives its
//! fingerprint. Failures are per-category: they are logged, recorded in the
//! [`BuildReport`], and the build carries on.

use tracing::{info, warn};

use crate::domain::{
    derive_fingerprint, FingerprintRegistry, SampleSubject, TemplateKey,
    DEFAULT_MIN_FINGERPRINT_LEN,
};
use crate::error::RegistryError;
use crate::ports::TemplateRenderer;

/// Outcome of one registry build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Categories that produced a fingerprint.
    pub registered: Vec<TemplateKey>,
    /// Categories that were skipped, with the reason.
    pub skipped: Vec<RegistryError>,
}

impl BuildReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Builder for [`FingerprintRegistry`].
///
/// Consumed by `build`, so a given builder can only produce one registry.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    categories: Vec<TemplateKey>,
    subject: SampleSubject,
    min_len: usize,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            subject: SampleSubject::default(),
            min_len: DEFAULT_MIN_FINGERPRINT_LEN,
        }
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track one more template.
    pub fn category(mut self, key: impl Into<TemplateKey>) -> Self {
        let key = key.into();
        if !self.categories.contains(&key) {
            self.categories.push(key);
        }
        self
    }

    /// Track several templates.
    pub fn categories<I, K>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<TemplateKey>,
    {
        keys.into_iter().fold(self, |builder, key| builder.category(key))
    }

    /// Override the synthetic subject.
    pub fn sample_subject(mut self, subject: SampleSubject) -> Self {
        self.subject = subject;
        self
    }

    /// Minimum fingerprint length in chars.
    pub fn min_fingerprint_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Render every category once and build the registry.
    pub fn build(self, renderer: &dyn TemplateRenderer) -> (FingerprintRegistry, BuildReport) {
        let mut entries = Vec::with_capacity(self.categories.len());
        let mut report = BuildReport::default();

        for key in self.categories {
            let derived = renderer
                .render(&key, &self.subject)
                .map_err(|source| RegistryError::TemplateRender {
                    key: key.to_string(),
                    source,
                })
                .and_then(|rendered| derive_fingerprint(&key, &rendered, &self.subject, self.min_len));

            match derived {
                Ok(fingerprint) => {
                    info!(
                        key = %key,
                        fingerprint = %fingerprint,
                        "[zd-03] Registered fingerprint"
                    );
                    report.registered.push(key.clone());
                    entries.push((key, fingerprint));
                }
                Err(err) => {
                    warn!(key = %key, error = %err, "[zd-03] Skipping category");
                    report.skipped.push(err);
                }
            }
        }

        info!(
            registered = report.registered.len(),
            skipped = report.skipped.len(),
            "[zd-03] Fingerprint registry built"
        );

        (FingerprintRegistry::from_entries(entries), report)
    }
}
