//! Per call site statistics.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Aggregated measurements for one call site.
///
/// `acc_time` sums self times, while `min_time`/`max_time` track inclusive
/// times. The report therefore shows both how long a call normally takes end
/// to end and how much time the call site spent in its own body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSiteStats {
    count: u64,
    acc_time: Duration,
    min_time: Duration,
    max_time: Duration,
}

impl Default for CallSiteStats {
    fn default() -> Self {
        Self::new()
    }
}

impl CallSiteStats {
    /// Create empty stats.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            acc_time: Duration::ZERO,
            min_time: Duration::MAX,
            max_time: Duration::ZERO,
        }
    }

    /// Record one completed scope.
    pub fn add_time(&mut self, inclusive: Duration, self_time: Duration) {
        self.count += 1;
        self.acc_time = self.acc_time.saturating_add(self_time);
        self.min_time = self.min_time.min(inclusive);
        self.max_time = self.max_time.max(inclusive);
    }

    /// Number of completed scopes.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Sum of self times.
    #[must_use]
    pub const fn acc_time(&self) -> Duration {
        self.acc_time
    }

    /// Shortest inclusive time, `None` before the first sample.
    #[must_use]
    pub const fn min_time(&self) -> Option<Duration> {
        if self.count == 0 {
            None
        } else {
            Some(self.min_time)
        }
    }

    /// Longest inclusive time, `None` before the first sample.
    #[must_use]
    pub const fn max_time(&self) -> Option<Duration> {
        if self.count == 0 {
            None
        } else {
            Some(self.max_time)
        }
    }

    /// Mean self time per call, zero before the first sample.
    #[must_use]
    pub fn avg_time(&self) -> Duration {
        if self.count == 0 {
            return Duration::ZERO;
        }
        let nanos = self.acc_time.as_nanos() / u128::from(self.count);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Get accumulated self time in seconds.
    #[must_use]
    pub fn acc_secs(&self) -> f64 {
        self.acc_time.as_secs_f64()
    }

    /// Get minimum inclusive time in seconds.
    #[must_use]
    pub fn min_secs(&self) -> f64 {
        self.min_time().map_or(0.0, |d| d.as_secs_f64())
    }

    /// Get maximum inclusive time in seconds.
    #[must_use]
    pub fn max_secs(&self) -> f64 {
        self.max_time().map_or(0.0, |d| d.as_secs_f64())
    }

    /// Get average self time in seconds.
    #[must_use]
    pub fn avg_secs(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.acc_secs() / self.count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn empty_stats_have_no_extremes() {
        let stats = CallSiteStats::new();
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.acc_time(), Duration::ZERO);
        assert_eq!(stats.min_time(), None);
        assert_eq!(stats.max_time(), None);
        assert_eq!(stats.avg_time(), Duration::ZERO);
    }

    #[test]
    fn extremes_follow_inclusive_time_and_sum_follows_self_time() {
        let mut stats = CallSiteStats::new();
        stats.add_time(ms(10), ms(4));
        stats.add_time(ms(30), ms(30));
        stats.add_time(ms(20), ms(2));

        assert_eq!(stats.count(), 3);
        assert_eq!(stats.acc_time(), ms(36));
        assert_eq!(stats.min_time(), Some(ms(10)));
        assert_eq!(stats.max_time(), Some(ms(30)));
        assert_relative_eq!(stats.avg_secs(), 0.012, epsilon = 1e-12);
        assert_eq!(stats.avg_time(), ms(12));
    }

    #[test]
    fn single_sample_is_both_min_and_max() {
        let mut stats = CallSiteStats::new();
        stats.add_time(ms(5), ms(1));
        assert_eq!(stats.min_time(), Some(ms(5)));
        assert_eq!(stats.max_time(), Some(ms(5)));
        assert_relative_eq!(stats.min_secs(), 0.005);
        assert_relative_eq!(stats.acc_secs(), 0.001);
    }
}
