//! Call site identity.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one instrumentation point.
///
/// Keys order by line first, then function name, then file name. The order
/// only drives map lookups; reports list call sites in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallSiteKey {
    /// Source file, as produced by `file!()`.
    pub file: Cow<'static, str>,
    /// Enclosing function.
    pub function: Cow<'static, str>,
    /// Source line.
    pub line: u32,
}

impl CallSiteKey {
    /// Create a key.
    #[must_use]
    pub fn new(
        file: impl Into<Cow<'static, str>>,
        function: impl Into<Cow<'static, str>>,
        line: u32,
    ) -> Self {
        Self {
            file: file.into(),
            function: function.into(),
            line,
        }
    }
}

impl Ord for CallSiteKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.function.cmp(&other.function))
            .then_with(|| self.file.cmp(&other.file))
    }
}

impl PartialOrd for CallSiteKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CallSiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.function, self.file, self.line)
    }
}

/// Reduce a `std::any::type_name` path to the bare function name.
///
/// Trailing closure segments are skipped, so a scope opened inside a closure
/// is attributed to the function that defines the closure.
#[must_use]
pub fn bare_function_name(path: &str) -> &str {
    let mut path = path;
    while let Some(rest) = path.strip_suffix("::{{closure}}") {
        path = rest;
    }
    path.rsplit("::").next().unwrap_or(path)
}
