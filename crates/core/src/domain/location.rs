// Module Location Domain Model

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::error::{DomainError, Result};

/// File path of the running unit of code and its containing directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleLocation {
    file: PathBuf,
    directory: PathBuf,
}

impl ModuleLocation {
    /// Derive a location from a file path
    ///
    /// The directory is the immediate parent of `file`. Paths without a
    /// parent (empty path, filesystem root) are rejected.
    ///
    /// # Example
    /// ```text
    /// let loc = ModuleLocation::from_file("/opt/locus/bin/locus")?;
    /// assert_eq!(loc.directory(), Path::new("/opt/locus/bin"));
    /// ```
    pub fn from_file(file: impl Into<PathBuf>) -> Result<Self> {
        let file = file.into();
        let directory = match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => return Err(DomainError::InvalidLocation(file)),
        };

        Ok(Self { file, directory })
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
