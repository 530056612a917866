// Location resolver implementation
use std::path::{Path, PathBuf};
use tracing::debug;

use locus_core::domain::ModuleLocation;
use locus_core::error::Result;
use locus_core::port::LocationResolver;

/// Resolves the location of the running executable
pub struct ExecutableLocationResolver {
    // Test hook: resolve this path instead of current_exe
    override_path: Option<PathBuf>,
}

impl ExecutableLocationResolver {
    pub fn new() -> Self {
        Self {
            override_path: None,
        }
    }

    /// Resolve `path` instead of the running executable
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            override_path: Some(path.into()),
        }
    }
}

impl Default for ExecutableLocationResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonicalize when possible; symlink targets and relative segments are resolved
fn canonical_or_raw(path: &Path) -> PathBuf {
    match std::fs::canonicalize(path) {
        Ok(canonical) => canonical,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Canonicalize failed, using raw path");
            path.to_path_buf()
        }
    }
}

impl LocationResolver for ExecutableLocationResolver {
    fn locate(&self) -> Result<ModuleLocation> {
        let raw = match &self.override_path {
            Some(path) => path.clone(),
            None => std::env::current_exe()?,
        };

        let file = canonical_or_raw(&raw);
        let location = ModuleLocation::from_file(file)?;

        debug!(
            file = %location.file().display(),
            directory = %location.directory().display(),
            "Location resolved"
        );

        Ok(location)
    }
}
