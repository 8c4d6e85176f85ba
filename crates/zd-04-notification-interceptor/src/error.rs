//! Error types for the Notification Interceptor subsystem

use thiserror::Error;

/// Errors raised while installing the interceptor.
///
/// Intercepting itself never fails: every unresolvable case allows the
/// notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterceptorError {
    #[error("Fingerprint registry is empty; nothing to intercept")]
    EmptyRegistry,
}
