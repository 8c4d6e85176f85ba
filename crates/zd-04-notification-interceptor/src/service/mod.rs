//! Service Layer
//!
//! The installed hook.

pub mod interceptor;

pub use interceptor::NotificationInterceptor;
