//! Call site registry: aggregation and report order.

use std::collections::BTreeMap;
use std::io::Write;
use std::time::Duration;

use crate::report::{self, ReportConfig};
use crate::site::CallSiteKey;
use crate::stats::CallSiteStats;

/// Maps call sites to their aggregated statistics.
///
/// Lookup goes through a key-ordered index, while `entries` keeps the call
/// sites in the order they were first recorded. Both always hold the same
/// set of keys.
#[derive(Debug, Clone, Default)]
pub struct CallSiteRegistry {
    /// Key to position in `entries`.
    index: BTreeMap<CallSiteKey, usize>,
    /// Call sites in first-seen order.
    entries: Vec<(CallSiteKey, CallSiteStats)>,
}

impl CallSiteRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed scope for `key`.
    pub fn record(&mut self, key: CallSiteKey, inclusive: Duration, self_time: Duration) {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                tracing::trace!(site = %key, "new call site");
                let slot = self.entries.len();
                self.index.insert(key.clone(), slot);
                self.entries.push((key, CallSiteStats::new()));
                slot
            }
        };
        self.entries[slot].1.add_time(inclusive, self_time);
    }

    /// Drop all statistics.
    pub fn clear(&mut self) {
        tracing::debug!(sites = self.entries.len(), "clearing call site registry");
        self.index.clear();
        self.entries.clear();
    }

    /// Number of distinct call sites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get stats for a specific call site.
    #[must_use]
    pub fn get(&self, key: &CallSiteKey) -> Option<&CallSiteStats> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Iterate call sites in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&CallSiteKey, &CallSiteStats)> {
        self.entries.iter().map(|(key, stats)| (key, stats))
    }

    /// Iterate call sites in key order (line, function, file).
    pub fn iter_by_site(&self) -> impl Iterator<Item = (&CallSiteKey, &CallSiteStats)> {
        self.index
            .iter()
            .map(|(key, &slot)| (key, &self.entries[slot].1))
    }

    /// Write the report with the default layout.
    pub fn render<W: Write + ?Sized>(&self, sink: &mut W) -> std::io::Result<()> {
        self.render_with(sink, &ReportConfig::default())
    }

    /// Write the report, one line per call site in first-seen order.
    pub fn render_with<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        config: &ReportConfig,
    ) -> std::io::Result<()> {
        report::write_report(sink, self.entries.iter(), config)
    }
}
