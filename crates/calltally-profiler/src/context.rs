//! Process-wide default profiler.

use std::sync::OnceLock;

use crate::error::Result;
use crate::profiler::Profiler;

/// Profiler used by the argument-less macros.
static GLOBAL: OnceLock<Profiler> = OnceLock::new();

/// The process-wide profiler, created on first use.
pub fn global() -> &'static Profiler {
    GLOBAL.get_or_init(|| {
        tracing::debug!("initializing global profiler");
        Profiler::new()
    })
}

/// Reset the statistics of the global profiler.
pub fn clear() {
    global().clear();
}

/// Write the global profiler's report to stdout.
pub fn report() -> Result<()> {
    global().write_report_to_stdout()
}
