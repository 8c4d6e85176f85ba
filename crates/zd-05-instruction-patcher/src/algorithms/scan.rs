//! Call-site scan

use crate::domain::{CallPattern, Instruction};

/// Index of the first instruction whose operand text contains `pattern`.
///
/// Single front-to-back walk; later occurrences are ignored.
pub fn scan(instructions: &[Instruction], pattern: &CallPattern) -> Option<usize> {
    instructions
        .iter()
        .position(|instruction| pattern.matches(instruction))
}
