// Process metadata port

use crate::domain::ProcessInfo;
use crate::error::Result;

/// Process probe port for identifier and platform lookups
pub trait ProcessProbe: Send + Sync {
    /// Get identifier and platform of the current process
    fn process_info(&self) -> Result<ProcessInfo>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::domain::{Platform, ProcessId};
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Mock ProcessProbe for testing
    pub struct MockProcessProbe {
        pid: AtomicU32,
        platform: String,
    }

    impl MockProcessProbe {
        pub fn new(pid: u32, platform: impl Into<String>) -> Self {
            Self {
                pid: AtomicU32::new(pid),
                platform: platform.into(),
            }
        }

        pub fn set_pid(&self, pid: u32) {
            self.pid.store(pid, Ordering::SeqCst);
        }
    }

    impl ProcessProbe for MockProcessProbe {
        fn process_info(&self) -> Result<ProcessInfo> {
            Ok(ProcessInfo {
                pid: ProcessId::new(self.pid.load(Ordering::SeqCst))?,
                platform: Platform::new(self.platform.clone())?,
            })
        }
    }
}
