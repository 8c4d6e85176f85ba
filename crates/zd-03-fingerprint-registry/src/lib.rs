//! # ZD-03 Fingerprint Registry
//!
//! Recognises free-text notifications that came from a tracked template.
//!
//! **Subsystem ID:** 03
//! **Architecture:** Hexagonal (Domain + Ports + Service)
//!
//! ## Purpose
//!
//! Some notifications reach the host's emission entrypoint as fully rendered
//! text only; the template key they came from is gone. At startup the
//! registry renders every tracked template once with a synthetic subject,
//! cuts the subject's tokens back out, and keeps the template's invariant
//! wording as a fingerprint. At runtime `matches(text)` is a substring test
//! against those fingerprints.
//!
//! ## Module Structure
//!
//! ```text
//! zd-03-fingerprint-registry/
//! ├── domain/          # TemplateKey, SampleSubject, Fingerprint, FingerprintRegistry
//! ├── ports/           # TemplateRenderer (host translation facility)
//! └── service/         # RegistryBuilder, BuildReport
//! ```
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: Built once per session; read-only afterwards.
//! - **INVARIANT-2**: A template that fails to render contributes no
//!   fingerprint and never aborts the build.
//! - **INVARIANT-3**: Any rendering of a tracked template, whatever the
//!   subject, contains that template's fingerprint.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::{
    derive_fingerprint, Fingerprint, FingerprintRegistry, SampleSubject, TemplateKey,
    DEFAULT_MIN_FINGERPRINT_LEN,
};
pub use error::RegistryError;
pub use ports::{MockTemplateRenderer, TemplateRenderer};
pub use service::{BuildReport, RegistryBuilder};
