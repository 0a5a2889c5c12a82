//! Wall-clock stopwatch and scoped timer.

use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

/// Accumulating stopwatch.
///
/// Time accumulates over every start/stop interval. While running, the
/// current interval is included in [`elapsed`](Self::elapsed).
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    started: Option<Instant>,
    accumulated: Duration,
}

impl Stopwatch {
    /// Create a stopped stopwatch reading zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            started: None,
            accumulated: Duration::ZERO,
        }
    }

    /// Create a running stopwatch.
    #[must_use]
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Begin an interval. Restarts the current interval if already running.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// End the current interval and add it to the total.
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.accumulated += started.elapsed();
        }
    }

    /// Stop and forget all accumulated time.
    pub fn reset(&mut self) {
        self.started = None;
        self.accumulated = Duration::ZERO;
    }

    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.started.is_none()
    }

    /// Accumulated time, including the running interval.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.accumulated + self.started.map_or(Duration::ZERO, |s| s.elapsed())
    }

    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

impl fmt::Display for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.seconds())
    }
}

/// Writes `label` followed by the elapsed seconds to a sink when dropped.
pub struct ScopedTimer<W: Write> {
    label: String,
    sink: W,
    stopwatch: Stopwatch,
}

impl<W: Write> ScopedTimer<W> {
    /// Start timing.
    pub fn new(label: impl Into<String>, sink: W) -> Self {
        Self {
            label: label.into(),
            sink,
            stopwatch: Stopwatch::start_new(),
        }
    }

    /// Time elapsed so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.stopwatch.elapsed()
    }
}

impl<W: Write> Drop for ScopedTimer<W> {
    fn drop(&mut self) {
        self.stopwatch.stop();
        let line = format!("{}{}\n", self.label, self.stopwatch);
        if let Err(e) = self
            .sink
            .write_all(line.as_bytes())
            .and_then(|()| self.sink.flush())
        {
            tracing::warn!("failed to write scoped timer result: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::SharedBuffer;

    #[test]
    fn stopped_stopwatch_does_not_advance() {
        let mut stopwatch = Stopwatch::start_new();
        std::thread::sleep(Duration::from_millis(2));
        stopwatch.stop();
        assert!(stopwatch.is_stopped());

        let frozen = stopwatch.elapsed();
        assert!(frozen >= Duration::from_millis(2));
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(stopwatch.elapsed(), frozen);
    }

    #[test]
    fn intervals_accumulate() {
        let mut stopwatch = Stopwatch::new();
        for _ in 0..2 {
            stopwatch.start();
            std::thread::sleep(Duration::from_millis(2));
            stopwatch.stop();
        }
        assert!(stopwatch.elapsed() >= Duration::from_millis(4));

        stopwatch.reset();
        assert_eq!(stopwatch.elapsed(), Duration::ZERO);
        assert!(stopwatch.is_stopped());
    }

    #[test]
    fn running_stopwatch_includes_current_interval() {
        let stopwatch = Stopwatch::start_new();
        std::thread::sleep(Duration::from_millis(2));
        assert!(!stopwatch.is_stopped());
        assert!(stopwatch.seconds() >= 0.002);
    }

    #[test]
    fn scoped_timer_writes_label_and_seconds() {
        let buffer = SharedBuffer::new();
        {
            let _timer = ScopedTimer::new("work took ", buffer.clone());
            std::thread::sleep(Duration::from_millis(1));
        }

        let out = buffer.contents();
        let seconds = out
            .strip_prefix("work took ")
            .and_then(|rest| rest.strip_suffix('\n'))
            .unwrap();
        assert!(seconds.parse::<f64>().unwrap() >= 0.001);
    }
}
