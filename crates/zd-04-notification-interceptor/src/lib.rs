//! # ZD-04 Notification Interceptor
//!
//! Hook on the host's single outgoing-notification entrypoint.
//!
//! **Subsystem ID:** 04
//! **Architecture:** Hexagonal (Domain + Service)
//!
//! ## Decision Flow
//!
//! ```text
//! text ──► [ZD-03 fingerprints] ──miss──► Allow
//!              │ hit
//!              ▼
//!        primary target location ──none──► Allow (fail open)
//!              │
//!              ▼
//!        [ZD-02 resolve container] ──none──► Allow (fail open)
//!              │
//!              ▼
//!        [ZD-01 show_warning?] ──false──► Suppress
//!              │ true
//!              ▼
//!            Allow
//! ```
//!
//! Untracked notifications cost one substring scan per fingerprint. The
//! interceptor never rewrites the notification.
//!
//! ## Dependencies
//!
//! | Subsystem | Used for |
//! |-----------|----------|
//! | ZD-01 | Policy lookup (lazy default record) |
//! | ZD-02 | Container resolution |
//! | ZD-03 | Text recognition |

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod error;
pub mod metrics;
pub mod service;

pub use domain::{DecisionReason, InterceptOutcome};
pub use error::InterceptorError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use service::NotificationInterceptor;
