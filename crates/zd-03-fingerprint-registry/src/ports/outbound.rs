//! # Outbound Ports
//!
//! Host template rendering.

use std::collections::{HashMap, HashSet};

use shared_types::HostError;

use crate::domain::{SampleSubject, TemplateKey};

/// Host template renderer - outbound port.
///
/// Renders `key` with `subject` as its single argument. May fail per key,
/// e.g. when the template expects an argument shape the sample cannot
/// satisfy.
pub trait TemplateRenderer {
    fn render(&self, key: &TemplateKey, subject: &SampleSubject) -> Result<String, HostError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Renderer backed by a table of `{0}` / `{1}` patterns.
///
/// `{0}` is replaced with the subject's label, `{1}` with its definition
/// label. Keys listed in `failing` always fail; unknown keys fail too.
#[derive(Debug, Clone, Default)]
pub struct MockTemplateRenderer {
    pub templates: HashMap<TemplateKey, String>,
    pub failing: HashSet<TemplateKey>,
}

impl MockTemplateRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, key: &str, pattern: &str) -> Self {
        self.templates
            .insert(TemplateKey::new(key), pattern.to_string());
        self
    }

    pub fn with_failing(mut self, key: &str) -> Self {
        self.failing.insert(TemplateKey::new(key));
        self
    }

    /// Render `key` with arbitrary labels, as the host would at runtime.
    pub fn render_with(&self, key: &str, label: &str, def_label: &str) -> Option<String> {
        self.templates
            .get(&TemplateKey::new(key))
            .map(|pattern| pattern.replace("{0}", label).replace("{1}", def_label))
    }
}

impl TemplateRenderer for MockTemplateRenderer {
    fn render(&self, key: &TemplateKey, subject: &SampleSubject) -> Result<String, HostError> {
        if self.failing.contains(key) {
            return Err(HostError::RenderFailed {
                key: key.to_string(),
                reason: "argument shape not satisfied".to_string(),
            });
        }
        self.render_with(key.as_str(), &subject.label, &subject.def_label)
            .ok_or_else(|| HostError::RenderFailed {
                key: key.to_string(),
                reason: "unknown key".to_string(),
            })
    }
}
