//! Splice strategies
//!
//! Both strategies build a fresh body; the input is only read.

use crate::domain::{
    CallPattern, Instruction, MethodBody, MethodRef, SkipReason, SpliceStrategy, Window,
};

use super::scan::scan;

/// Instructions added by `InsertAfterWindow`: load, call, reissued
/// combinator.
const WINDOW_INSERT_LEN: usize = 3;

/// Result of a successful splice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceOutcome {
    pub body: MethodBody,
    /// Index of the matched instruction in the input.
    pub at: usize,
    /// Instructions added (0 for a replacement).
    pub inserted: usize,
}

/// Scan `body` for `pattern` and apply `strategy` at the first match.
pub fn splice(
    body: &MethodBody,
    pattern: &CallPattern,
    strategy: &SpliceStrategy,
) -> Result<SpliceOutcome, SkipReason> {
    let at = scan(&body.instructions, pattern).ok_or_else(|| SkipReason::PatternNotFound {
        pattern: pattern.to_string(),
    })?;

    match strategy {
        SpliceStrategy::ReplaceCall { replacement } => Ok(replace_call(body, at, replacement)),
        SpliceStrategy::InsertAfterWindow {
            window,
            context_arg,
            predicate,
        } => insert_after_window(body, at, *window, *context_arg, predicate),
    }
}

fn replace_call(body: &MethodBody, at: usize, replacement: &MethodRef) -> SpliceOutcome {
    let mut instructions = body.instructions.clone();
    let labels = std::mem::take(&mut instructions[at].labels);
    instructions[at] = Instruction::call_virt(replacement.clone()).with_labels(labels);

    SpliceOutcome {
        body: MethodBody::new(body.signature.clone(), instructions),
        at,
        inserted: 0,
    }
}

fn insert_after_window(
    body: &MethodBody,
    at: usize,
    window: Window,
    context_arg: u16,
    predicate: &MethodRef,
) -> Result<SpliceOutcome, SkipReason> {
    if !window.is_valid() {
        return Err(SkipReason::InvalidWindow {
            after: window.after,
        });
    }
    let range = window
        .range(at, body.len())
        .ok_or(SkipReason::WindowOutOfBounds {
            at,
            before: window.before,
            after: window.after,
            len: body.len(),
        })?;
    let end = *range.end();

    // The reissued combinator must not carry the original's labels, or the
    // body would have two instructions answering to the same jump target.
    let combinator = body.instructions[end].unlabeled();

    let mut instructions = Vec::with_capacity(body.len() + WINDOW_INSERT_LEN);
    instructions.extend_from_slice(&body.instructions[..=end]);
    instructions.push(Instruction::load_arg(context_arg));
    instructions.push(Instruction::call_virt(predicate.clone()));
    instructions.push(combinator);
    instructions.extend_from_slice(&body.instructions[end + 1..]);

    Ok(SpliceOutcome {
        body: MethodBody::new(body.signature.clone(), instructions),
        at,
        inserted: WINDOW_INSERT_LEN,
    })
}
