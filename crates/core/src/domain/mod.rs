// Domain Layer - Pure value types

pub mod context;
pub mod error;
pub mod location;
pub mod process;
pub mod report;

// Re-exports
pub use context::{ScopedContext, CUSTOM_VAR_KEY, CUSTOM_VAR_VALUE};
pub use error::DomainError;
pub use location::ModuleLocation;
pub use process::{Platform, ProcessId, ProcessInfo, KNOWN_PLATFORMS};
pub use report::{Report, ReportLine, Snapshot};
