// Shared fixtures for the integration tests

use std::sync::Arc;

use locus_core::application::{install_custom_var, ReportService};
use locus_core::domain::ScopedContext;
use locus_infra_system::{ExecutableLocationResolver, SystemProcessProbe};

/// Report service wired with the real host adapters
pub fn host_service() -> ReportService {
    ReportService::new(
        Arc::new(ExecutableLocationResolver::new()),
        Arc::new(SystemProcessProbe::new()),
    )
}

/// Context holding the custom variable
pub fn seeded_context() -> ScopedContext {
    let mut ctx = ScopedContext::new();
    install_custom_var(&mut ctx);
    ctx
}
