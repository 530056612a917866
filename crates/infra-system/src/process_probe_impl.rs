// Process probe implementation
// reason: sysinfo for cross-platform process lookups
use tracing::debug;

use locus_core::domain::{Platform, ProcessId, ProcessInfo};
use locus_core::error::{AppError, Result};
use locus_core::port::ProcessProbe;

/// Process probe backed by sysinfo and the build's target OS
pub struct SystemProcessProbe {
    platform: Platform,
}

impl SystemProcessProbe {
    /// Create a new process probe
    ///
    /// # Example
    /// ```ignore
    /// let probe = SystemProcessProbe::new();
    /// ```
    pub fn new() -> Self {
        Self {
            platform: Platform::current(),
        }
    }
}

impl Default for SystemProcessProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessProbe for SystemProcessProbe {
    fn process_info(&self) -> Result<ProcessInfo> {
        let pid = sysinfo::get_current_pid()
            .map_err(|e| AppError::Probe(format!("current pid unavailable: {e}")))?;
        let pid = ProcessId::new(pid.as_u32())?;

        debug!(
            pid = %pid,
            platform = %self.platform,
            "Process info collected"
        );

        Ok(ProcessInfo {
            pid,
            platform: self.platform.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_own_pid() {
        let probe = SystemProcessProbe::new();
        let info = probe.process_info().unwrap();

        assert_eq!(info.pid.as_u32(), std::process::id());
    }

    #[test]
    fn test_platform_matches_build_target() {
        let info = SystemProcessProbe::default().process_info().unwrap();

        assert_eq!(info.platform.as_str(), std::env::consts::OS);
        assert!(info.platform.is_known());
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let probe = SystemProcessProbe::new();

        let first = probe.process_info().unwrap();
        let second = probe.process_info().unwrap();
        assert_eq!(first, second);
    }
}
