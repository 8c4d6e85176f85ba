//! Fingerprint derivation
//!
//! A rendering of a template is the template's fixed wording interleaved
//! with the subject's tokens. Cutting the sample subject's tokens out leaves
//! fragments that appear verbatim in every rendering of that template; the
//! longest one is kept as the fingerprint.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::template::{SampleSubject, TemplateKey};
use crate::error::RegistryError;

/// Fragments shorter than this (in chars) are too generic to identify a
/// template.
pub const DEFAULT_MIN_FINGERPRINT_LEN: usize = 4;

/// Invariant wording of one template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-sensitive substring test.
    pub fn is_found_in(&self, text: &str) -> bool {
        text.contains(self.0.as_str())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Split `rendered` at every occurrence of any of `tokens` (longest token
/// wins at a given position) and return the trimmed, non-empty fragments.
pub fn invariant_fragments<'a>(rendered: &'a str, tokens: &[String]) -> Vec<&'a str> {
    let mut fragments = Vec::new();
    let mut fragment_start = 0;
    let mut i = 0;

    while i < rendered.len() {
        let rest = &rendered[i..];
        match tokens
            .iter()
            .find(|token| !token.is_empty() && rest.starts_with(token.as_str()))
        {
            Some(token) => {
                fragments.push(&rendered[fragment_start..i]);
                i += token.len();
                fragment_start = i;
            }
            None => {
                i += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    fragments.push(&rendered[fragment_start..]);

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Derive the fingerprint of `key` from its rendering with `subject`.
pub fn derive_fingerprint(
    key: &TemplateKey,
    rendered: &str,
    subject: &SampleSubject,
    min_len: usize,
) -> Result<Fingerprint, RegistryError> {
    let tokens = subject.tokens();
    let fragments = invariant_fragments(rendered, &tokens);

    // First of the longest, so the choice is stable across runs.
    let longest = fragments
        .iter()
        .copied()
        .fold(None::<&str>, |best, fragment| match best {
            Some(b) if b.chars().count() >= fragment.chars().count() => Some(b),
            _ => Some(fragment),
        })
        .unwrap_or("");

    if longest.chars().count() < min_len {
        return Err(RegistryError::DegenerateFingerprint {
            key: key.to_string(),
            fragment: longest.to_string(),
        });
    }

    Ok(Fingerprint(longest.to_string()))
}
