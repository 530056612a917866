// Port Layer - Interfaces for host access

pub mod location_resolver;
pub mod process_probe;

// Re-exports
pub use location_resolver::LocationResolver;
pub use process_probe::ProcessProbe;
