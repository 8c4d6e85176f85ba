//! # Integration Scenarios
//!
//! - `notification_policy`: fingerprint → resolver → policy → verdict
//! - `patching`: stock targets against host method bodies
//! - `session_lifecycle`: load, toggle, save, reload, entity removal

pub mod notification_policy;
pub mod patching;
pub mod session_lifecycle;
