//! # Outbound Ports
//!
//! The host's method-body facility: read a compiled body as IR, install a
//! rewritten one.

use std::collections::{HashMap, HashSet};

use shared_types::HostError;

use crate::domain::{MethodBody, MethodSignature};

/// Host method bodies - outbound port.
pub trait MethodRepository {
    /// Current body of `method`.
    fn method_body(&self, method: &MethodSignature) -> Result<MethodBody, HostError>;

    /// Replace the body of `body.signature`. On error the previous body
    /// stays in place.
    fn install_body(&mut self, body: MethodBody) -> Result<(), HostError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// In-memory method table for testing.
#[derive(Debug, Clone, Default)]
pub struct MockMethodRepository {
    bodies: HashMap<MethodSignature, MethodBody>,
    rejected: HashSet<MethodSignature>,
    installs: Vec<MethodSignature>,
}

impl MockMethodRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: MethodBody) -> Self {
        self.bodies.insert(body.signature.clone(), body);
        self
    }

    /// Refuse installs for `method`.
    pub fn rejecting(mut self, method: MethodSignature) -> Self {
        self.rejected.insert(method);
        self
    }

    pub fn body(&self, method: &MethodSignature) -> Option<&MethodBody> {
        self.bodies.get(method)
    }

    /// Methods successfully installed, in order.
    pub fn installs(&self) -> &[MethodSignature] {
        &self.installs
    }
}

impl MethodRepository for MockMethodRepository {
    fn method_body(&self, method: &MethodSignature) -> Result<MethodBody, HostError> {
        self.bodies
            .get(method)
            .cloned()
            .ok_or_else(|| HostError::MethodNotFound(method.to_string()))
    }

    fn install_body(&mut self, body: MethodBody) -> Result<(), HostError> {
        if self.rejected.contains(&body.signature) {
            return Err(HostError::InstallRejected {
                method: body.signature.to_string(),
                reason: "install refused by mock".to_string(),
            });
        }
        self.installs.push(body.signature.clone());
        self.bodies.insert(body.signature.clone(), body);
        Ok(())
    }
}
