// Application Layer - Use Cases

pub mod constants;
pub mod report;

// Re-exports
pub use report::{install_custom_var, ReportService};
