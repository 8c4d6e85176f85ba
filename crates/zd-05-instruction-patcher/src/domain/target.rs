//! Patch targets

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::ir::{Instruction, MethodRef, MethodSignature};

/// Textual call-site pattern, matched as a substring of an instruction's
/// operand text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallPattern(pub String);

impl CallPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, instruction: &Instruction) -> bool {
        instruction.operand.is_some() && instruction.operand_text().contains(&self.0)
    }
}

impl fmt::Display for CallPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CallPattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

/// Fixed window bracketing the matched instruction.
///
/// Covers `[match - before, match + after]`. The last instruction of the
/// window is the boolean combinator consuming the matched call's result,
/// so `after` must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub before: usize,
    pub after: usize,
}

impl Window {
    pub const fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    pub fn is_valid(&self) -> bool {
        self.after >= 1
    }

    /// Index range of the window around `at` in a body of `len`
    /// instructions, or `None` if it does not fit.
    pub fn range(&self, at: usize, len: usize) -> Option<RangeInclusive<usize>> {
        let start = at.checked_sub(self.before)?;
        let end = at.checked_add(self.after)?;
        (end < len).then_some(start..=end)
    }
}

/// How the matched call site is rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpliceStrategy {
    /// Replace the matched call with a call to `replacement`.
    ReplaceCall { replacement: MethodRef },
    /// Leave the window intact and append a predicate call plus a reissued
    /// combinator after it.
    InsertAfterWindow {
        window: Window,
        context_arg: u16,
        predicate: MethodRef,
    },
}

impl SpliceStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReplaceCall { .. } => "ReplaceCall",
            Self::InsertAfterWindow { .. } => "InsertAfterWindow",
        }
    }

    /// The predicate the rewritten body will call.
    pub fn predicate(&self) -> &MethodRef {
        match self {
            Self::ReplaceCall { replacement } => replacement,
            Self::InsertAfterWindow { predicate, .. } => predicate,
        }
    }
}

/// One rewrite job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchTarget {
    pub method: MethodSignature,
    pub pattern: CallPattern,
    pub strategy: SpliceStrategy,
}

impl PatchTarget {
    pub fn replace_call(
        method: MethodSignature,
        pattern: impl Into<CallPattern>,
        replacement: MethodRef,
    ) -> Self {
        Self {
            method,
            pattern: pattern.into(),
            strategy: SpliceStrategy::ReplaceCall { replacement },
        }
    }

    pub fn insert_after_window(
        method: MethodSignature,
        pattern: impl Into<CallPattern>,
        window: Window,
        context_arg: u16,
        predicate: MethodRef,
    ) -> Self {
        Self {
            method,
            pattern: pattern.into(),
            strategy: SpliceStrategy::InsertAfterWindow {
                window,
                context_arg,
                predicate,
            },
        }
    }
}
