//! # Extension Configuration
//!
//! Everything the bootstrap needs, with defaults matching the stock host
//! content. Nothing is read from the environment.

use zd_03_fingerprint_registry::{SampleSubject, TemplateKey, DEFAULT_MIN_FINGERPRINT_LEN};
use zd_telemetry::TelemetryConfig;

use crate::error::ConfigError;
use crate::wiring::default_tracked_templates;

/// Complete extension configuration.
#[derive(Debug, Clone)]
pub struct ExtensionConfig {
    /// Templates whose renderings the interceptor recognises.
    pub tracked_templates: Vec<TemplateKey>,
    /// Shortest fingerprint accepted from a rendering.
    pub min_fingerprint_len: usize,
    /// Subject rendered into each tracked template at startup.
    pub sample_subject: SampleSubject,
    /// Run the instruction patcher at bootstrap.
    pub patching_enabled: bool,
    /// Logging configuration.
    pub telemetry: TelemetryConfig,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            tracked_templates: default_tracked_templates(),
            min_fingerprint_len: DEFAULT_MIN_FINGERPRINT_LEN,
            sample_subject: SampleSubject::default(),
            patching_enabled: true,
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl ExtensionConfig {
    pub fn builder() -> ExtensionConfigBuilder {
        ExtensionConfigBuilder::default()
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tracked_templates.is_empty() {
            return Err(ConfigError::NoTrackedTemplates);
        }
        if self
            .tracked_templates
            .iter()
            .any(|key| key.as_str().trim().is_empty())
        {
            return Err(ConfigError::EmptyTemplateKey);
        }
        if self.min_fingerprint_len == 0 {
            return Err(ConfigError::ZeroMinFingerprintLen);
        }
        if self.sample_subject.label.is_empty() || self.sample_subject.def_label.is_empty() {
            return Err(ConfigError::EmptySampleSubject);
        }
        Ok(())
    }
}

/// Fluent builder for [`ExtensionConfig`], starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct ExtensionConfigBuilder {
    config: ExtensionConfig,
}

impl ExtensionConfigBuilder {
    /// Replace the tracked template list.
    pub fn tracked_templates<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<TemplateKey>,
    {
        self.config.tracked_templates = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Track one more template.
    pub fn track(mut self, key: impl Into<TemplateKey>) -> Self {
        self.config.tracked_templates.push(key.into());
        self
    }

    pub fn min_fingerprint_len(mut self, min_len: usize) -> Self {
        self.config.min_fingerprint_len = min_len;
        self
    }

    pub fn sample_subject(mut self, subject: SampleSubject) -> Self {
        self.config.sample_subject = subject;
        self
    }

    pub fn patching_enabled(mut self, enabled: bool) -> Self {
        self.config.patching_enabled = enabled;
        self
    }

    pub fn telemetry(mut self, telemetry: TelemetryConfig) -> Self {
        self.config.telemetry = telemetry;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<ExtensionConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
