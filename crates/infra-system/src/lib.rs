// Locus Infrastructure - Host Adapters
// Implements: LocationResolver, ProcessProbe

pub mod location_resolver_impl;
pub mod process_probe_impl;

pub use location_resolver_impl::ExecutableLocationResolver;
pub use process_probe_impl::SystemProcessProbe;
