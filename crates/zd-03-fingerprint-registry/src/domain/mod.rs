//! Domain Layer - Pure fingerprint logic
//!
//! This layer contains:
//! - Template keys and the synthetic sample subject
//! - Fingerprint derivation (token stripping)
//! - The read-only registry and its matcher
//!
//! RULES:
//! - No I/O operations
//! - Rendering goes through `ports::TemplateRenderer`

pub mod fingerprint;
pub mod registry;
pub mod template;

pub use fingerprint::{derive_fingerprint, Fingerprint, DEFAULT_MIN_FINGERPRINT_LEN};
pub use registry::FingerprintRegistry;
pub use template::{SampleSubject, TemplateKey};
