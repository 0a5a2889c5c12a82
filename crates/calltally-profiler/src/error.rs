//! Error types for report output.

use std::path::PathBuf;

use thiserror::Error;

/// Profiler error type.
///
/// Measurement itself cannot fail; only writing a report can.
#[derive(Error, Debug)]
pub enum Error {
    /// The report sink rejected a write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The report file could not be created or written.
    #[error("failed to write report to {}: {source}", path.display())]
    ReportFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
