// Location resolution port

use crate::domain::ModuleLocation;
use crate::error::Result;

/// Resolves where the running unit of code lives on disk
pub trait LocationResolver: Send + Sync {
    /// Resolve the file path and containing directory
    ///
    /// # Example
    /// ```text
    /// let loc = resolver.locate()?;
    /// println!("{}", loc.directory().display());
    /// ```
    fn locate(&self) -> Result<ModuleLocation>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::path::PathBuf;

    /// Resolver returning a fixed path
    pub struct FixedLocationResolver {
        file: PathBuf,
    }

    impl FixedLocationResolver {
        pub fn new(file: impl Into<PathBuf>) -> Self {
            Self { file: file.into() }
        }
    }

    impl LocationResolver for FixedLocationResolver {
        fn locate(&self) -> Result<ModuleLocation> {
            Ok(ModuleLocation::from_file(self.file.clone())?)
        }
    }

    /// Resolver that always fails (for error path tests)
    pub struct FailingLocationResolver;

    impl LocationResolver for FailingLocationResolver {
        fn locate(&self) -> Result<ModuleLocation> {
            Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "executable path unavailable",
            )))
        }
    }
}
