//! Ports Layer
//!
//! The host translation facility used once at startup.

pub mod outbound;

pub use outbound::{MockTemplateRenderer, TemplateRenderer};
