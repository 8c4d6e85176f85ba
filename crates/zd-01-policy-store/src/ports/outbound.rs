//! # Outbound Ports
//!
//! The host's generic persistence facility, reduced to named byte sections.

use std::collections::HashMap;

use shared_types::HostError;

/// Host session archive - outbound port.
///
/// Sections are written at session save and read back at session load.
pub trait SessionArchive {
    /// Read a section; `Ok(None)` when the save does not contain it.
    fn read_section(&self, key: &str) -> Result<Option<Vec<u8>>, HostError>;

    /// Replace a section.
    fn write_section(&mut self, key: &str, bytes: Vec<u8>) -> Result<(), HostError>;
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// In-memory archive for testing.
#[derive(Debug, Clone, Default)]
pub struct MockSessionArchive {
    /// Stored sections.
    pub sections: HashMap<String, Vec<u8>>,
    /// When set, every call fails with a persistence error.
    pub fail: bool,
}

impl MockSessionArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// An archive whose every operation fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl SessionArchive for MockSessionArchive {
    fn read_section(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        if self.fail {
            return Err(HostError::Persistence(format!("cannot read {key}")));
        }
        Ok(self.sections.get(key).cloned())
    }

    fn write_section(&mut self, key: &str, bytes: Vec<u8>) -> Result<(), HostError> {
        if self.fail {
            return Err(HostError::Persistence(format!("cannot write {key}")));
        }
        self.sections.insert(key.to_string(), bytes);
        Ok(())
    }
}
