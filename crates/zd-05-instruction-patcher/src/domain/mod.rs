//! Domain Layer
//!
//! Instruction IR, patch targets and per-job state.

pub mod ir;
pub mod state;
pub mod target;

pub use ir::{Instruction, Label, MethodBody, MethodRef, MethodSignature, OpCode, Operand};
pub use state::{PatchJob, PatchRecord, PatchState, SkipReason};
pub use target::{CallPattern, PatchTarget, SpliceStrategy, Window};
