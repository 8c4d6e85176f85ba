//! # Extension Container
//!
//! Configuration, process-level bootstrap and per-session state.

pub mod config;
pub mod extension;
pub mod session;

pub use config::{ExtensionConfig, ExtensionConfigBuilder};
pub use extension::Extension;
pub use session::SessionContext;
