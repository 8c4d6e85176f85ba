//! # ZD-05 Instruction Patcher
//!
//! Rewrites host method bodies at load time so inline decision points
//! consult container policy.
//!
//! **Subsystem ID:** 05
//! **Architecture:** Hexagonal (Domain + Algorithms + Ports + Service)
//!
//! ## Purpose
//!
//! The host's compiled code never calls out to this extension. Each
//! [`PatchTarget`] names one method, one call-site pattern and one splice
//! strategy; the [`PatchEngine`] fetches the body through the
//! [`MethodRepository`] port, runs a single front-to-back scan for the
//! pattern, splices a new body and installs it.
//!
//! | Strategy | Effect at the matched call |
//! |----------|----------------------------|
//! | `ReplaceCall` | Swap the call for a same-polarity predicate |
//! | `InsertAfterWindow` | Append `ldarg; callvirt predicate; <combinator>` after a fixed window |
//!
//! ## Module Structure
//!
//! ```text
//! zd-05-instruction-patcher/
//! ├── domain/          # IR, PatchTarget, PatchState, PatchRecord
//! ├── algorithms/      # scan, splice (pure)
//! ├── ports/           # MethodRepository
//! └── service/         # PatchEngine
//! ```
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: Splicing never mutates its input body.
//! - **INVARIANT-2**: A job ends `Spliced` or `Skipped`; a skipped job
//!   installs nothing.
//! - **INVARIANT-3**: Targets are applied once per engine.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod algorithms;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use algorithms::{scan, splice, SpliceOutcome};
pub use domain::{
    CallPattern, Instruction, Label, MethodBody, MethodRef, MethodSignature, OpCode, Operand,
    PatchJob, PatchRecord, PatchState, PatchTarget, SkipReason, SpliceStrategy, Window,
};
pub use error::PatchError;
pub use ports::{MethodRepository, MockMethodRepository};
pub use service::PatchEngine;
