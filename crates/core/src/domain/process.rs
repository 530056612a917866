// Process Domain Model

use serde::Serialize;

use super::error::{DomainError, Result};

/// Target OS identifiers emitted by the Rust toolchain (`std::env::consts::OS`)
pub const KNOWN_PLATFORMS: &[&str] = &[
    "linux",
    "macos",
    "ios",
    "tvos",
    "watchos",
    "visionos",
    "freebsd",
    "dragonfly",
    "netbsd",
    "openbsd",
    "solaris",
    "illumos",
    "android",
    "windows",
    "haiku",
    "hermit",
    "aix",
    "fuchsia",
    "redox",
    "espidf",
    "horizon",
    "vita",
    "nto",
    "emscripten",
    "wasi",
    "uefi",
];

/// Process identifier (always positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProcessId(u32);

impl ProcessId {
    pub fn new(pid: u32) -> Result<Self> {
        if pid == 0 {
            return Err(DomainError::InvalidProcessId(pid));
        }
        Ok(Self(pid))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ProcessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host platform label (e.g. "linux", "macos", "windows")
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Platform(String);

impl Platform {
    pub fn new(label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(DomainError::EmptyPlatform);
        }
        Ok(Self(label))
    }

    /// Platform of the running build
    pub fn current() -> Self {
        Self(std::env::consts::OS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        KNOWN_PLATFORMS.contains(&self.0.as_str())
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Process-level facts reported by a `ProcessProbe`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessInfo {
    pub pid: ProcessId,
    pub platform: Platform,
}
