//! Call-tree profiler with per call site statistics.
//!
//! Annotated scopes push a frame onto a per-thread call stack when they are
//! entered and pop it when they are left. Each completed scope yields one
//! sample: its inclusive (wall-clock) time and its self time, which is the
//! inclusive time minus everything spent in nested instrumented scopes.
//! Samples are aggregated per call site (file, function, line) and can be
//! rendered as a plain-text report.
//!
//! # Feature Flags
//!
//! - `profiling` (default): Enable the scope macros. When disabled,
//!   [`profile_scope!`] expands to nothing.
//!
//! # Usage
//!
//! ```ignore
//! use calltally_profiler::profile_scope;
//!
//! fn fibonacci(n: u64) -> u64 {
//!     profile_scope!();
//!     if n <= 1 { 1 } else { fibonacci(n - 1) + fibonacci(n - 2) }
//! }
//!
//! fibonacci(10);
//! calltally_profiler::report()?;
//! ```
//!
//! An explicitly owned profiler works the same way:
//!
//! ```ignore
//! let profiler = calltally_profiler::Profiler::new();
//! {
//!     profile_scope!(profiler);
//!     // ... measured code
//! }
//! profiler.render(&mut std::io::stdout())?;
//! ```

mod clock;
mod context;
mod error;
mod macros;
mod profiler;
mod registry;
mod report;
mod site;
mod stats;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use context::{clear, global, report};
pub use error::{Error, Result};
pub use profiler::{ProfileGuard, Profiler};
pub use registry::CallSiteRegistry;
pub use report::ReportConfig;
pub use site::{bare_function_name, CallSiteKey};
pub use stats::CallSiteStats;
