// Report assembly use case
use crate::application::constants::{
    LABEL_CUSTOM_VAR, LABEL_DIRECTORY, LABEL_FILE, LABEL_PLATFORM, LABEL_PROCESS_ID,
};
use crate::domain::{
    ModuleLocation, ProcessInfo, Report, ReportLine, ScopedContext, Snapshot, CUSTOM_VAR_KEY,
    CUSTOM_VAR_VALUE,
};
use crate::error::{AppError, Result};
use crate::port::{LocationResolver, ProcessProbe};
use std::sync::Arc;
use tracing::debug;

/// Store the custom variable in `ctx`
///
/// Returns the value previously held under `CUSTOM_VAR_KEY`, if any.
pub fn install_custom_var(ctx: &mut ScopedContext) -> Option<String> {
    ctx.insert(CUSTOM_VAR_KEY, CUSTOM_VAR_VALUE)
}

/// Collected values, before formatting
struct Facts {
    location: ModuleLocation,
    process: ProcessInfo,
    custom_var: String,
}

/// Builds the location/process report
///
/// Lines are always emitted in this order:
/// 1. module directory
/// 2. module file
/// 3. process id
/// 4. platform
/// 5. custom variable
pub struct ReportService {
    resolver: Arc<dyn LocationResolver>,
    probe: Arc<dyn ProcessProbe>,
}

impl ReportService {
    /// Create a new report service
    ///
    /// # Example
    /// ```text
    /// let service = ReportService::new(
    ///     Arc::new(ExecutableLocationResolver::new()),
    ///     Arc::new(SystemProcessProbe::new()),
    /// );
    /// ```
    pub fn new(resolver: Arc<dyn LocationResolver>, probe: Arc<dyn ProcessProbe>) -> Self {
        Self { resolver, probe }
    }

    /// Generate the text report
    ///
    /// Fails with `AppError::NotFound` if `ctx` has no custom variable.
    pub fn generate(&self, ctx: &ScopedContext) -> Result<Report> {
        let facts = self.collect(ctx)?;

        let report = Report::new(vec![
            ReportLine::new(LABEL_DIRECTORY, facts.location.directory().display().to_string()),
            ReportLine::new(LABEL_FILE, facts.location.file().display().to_string()),
            ReportLine::new(LABEL_PROCESS_ID, facts.process.pid.to_string()),
            ReportLine::new(LABEL_PLATFORM, facts.process.platform.to_string()),
            ReportLine::new(LABEL_CUSTOM_VAR, facts.custom_var),
        ]);

        debug!(lines = report.len(), "Report generated");
        Ok(report)
    }

    /// Same data as `generate`, in serializable form
    pub fn snapshot(&self, ctx: &ScopedContext) -> Result<Snapshot> {
        let facts = self.collect(ctx)?;

        Ok(Snapshot {
            directory: facts.location.directory().display().to_string(),
            file: facts.location.file().display().to_string(),
            pid: facts.process.pid.as_u32(),
            platform: facts.process.platform.to_string(),
            custom_var: facts.custom_var,
        })
    }

    fn collect(&self, ctx: &ScopedContext) -> Result<Facts> {
        // Check the context first so a missing slot fails without touching the host
        let custom_var = ctx
            .get(CUSTOM_VAR_KEY)
            .ok_or_else(|| AppError::NotFound(format!("context key '{CUSTOM_VAR_KEY}'")))?
            .to_string();

        let location = self.resolver.locate()?;
        let process = self.probe.process_info()?;

        Ok(Facts {
            location,
            process,
            custom_var,
        })
    }
}
