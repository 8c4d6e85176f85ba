//! Template keys and the sample subject

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a host translation template (`MessageDeterioratedAway`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateKey(pub String);

impl TemplateKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Synthetic subject rendered into every tracked template.
///
/// Its attributes are nonsense words so that they never collide with a
/// template's own wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSubject {
    /// Instance label (`apple`, `wooden shelf`, ...).
    pub label: String,
    /// Definition label (`apple` for every apple stack).
    pub def_label: String,
}

impl Default for SampleSubject {
    fn default() -> Self {
        Self {
            label: "zqxsamplething".to_string(),
            def_label: "zqxsampledef".to_string(),
        }
    }
}

impl SampleSubject {
    /// Every token the subject can contribute to a rendering, longest first.
    ///
    /// Includes capitalised forms since the host capitalises labels at the
    /// start of a sentence.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        for attribute in [&self.label, &self.def_label] {
            if attribute.is_empty() {
                continue;
            }
            let capitalised = capitalise_first(attribute);
            tokens.push(attribute.clone());
            if capitalised != *attribute {
                tokens.push(capitalised);
            }
        }
        tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        tokens.dedup();
        tokens
    }
}

fn capitalise_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
