//! Call-stack tracker.
//!
//! Every thread that enters an instrumented scope gets its own stack of
//! in-flight frames. When a frame is popped its inclusive time is added to
//! the parent's child time, so the parent's self time later excludes all of
//! its descendants. Recursive calls push independent frames and are only
//! merged afterwards, per call site, in the registry.
//!
//! Stacks and registry share one lock. A guard must be dropped on the thread
//! that created it, which `ProfileGuard` enforces by not being `Send`.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::Path;
use std::thread::{self, ThreadId};
use std::time::Duration;

use parking_lot::Mutex;

use crate::clock::{Clock, MonotonicClock};
use crate::error::{Error, Result};
use crate::registry::CallSiteRegistry;
use crate::report::ReportConfig;
use crate::site::CallSiteKey;

/// An instrumented scope that has been entered but not yet left.
#[derive(Debug)]
struct Frame {
    key: CallSiteKey,
    start: Duration,
    /// Inclusive time of completed nested scopes.
    child_time: Duration,
}

#[derive(Debug, Default)]
struct State {
    stacks: HashMap<ThreadId, Vec<Frame>>,
    registry: CallSiteRegistry,
}

/// Aggregation context for instrumented scopes.
pub struct Profiler<C = MonotonicClock> {
    clock: C,
    report_config: ReportConfig,
    state: Mutex<State>,
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Profiler {
    /// Create a profiler measuring wall-clock time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl<C: Clock> Profiler<C> {
    /// Create a profiler reading time from `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            report_config: ReportConfig::default(),
            state: Mutex::new(State::default()),
        }
    }

    /// Set the layout used by [`render`](Self::render) and the report writers.
    #[must_use]
    pub fn with_report_config(mut self, config: ReportConfig) -> Self {
        self.report_config = config;
        self
    }

    /// The report layout in use.
    #[must_use]
    pub fn report_config(&self) -> &ReportConfig {
        &self.report_config
    }

    /// Enter a scope at the given source location.
    pub fn enter(
        &self,
        file: impl Into<Cow<'static, str>>,
        function: impl Into<Cow<'static, str>>,
        line: u32,
    ) {
        self.enter_site(CallSiteKey::new(file, function, line));
    }

    /// Enter a scope for `key`.
    pub fn enter_site(&self, key: CallSiteKey) {
        let thread = thread::current().id();
        let mut state = self.state.lock();
        let start = self.clock.now();
        state.stacks.entry(thread).or_default().push(Frame {
            key,
            start,
            child_time: Duration::ZERO,
        });
    }

    /// Leave the innermost scope of the current thread and record it.
    ///
    /// # Panics
    ///
    /// Panics when the current thread has no open scope. That means an
    /// `exit` without a matching `enter`, which would otherwise corrupt the
    /// accounting of every enclosing scope.
    pub fn exit(&self) {
        let end = self.clock.now();
        let thread = thread::current().id();
        let mut state = self.state.lock();
        let State { stacks, registry } = &mut *state;

        let Some(stack) = stacks.get_mut(&thread) else {
            unmatched_exit(thread);
        };
        let Some(frame) = stack.pop() else {
            unmatched_exit(thread);
        };

        let elapsed = end.saturating_sub(frame.start);
        let self_time = elapsed.saturating_sub(frame.child_time);

        if let Some(parent) = stack.last_mut() {
            parent.child_time += elapsed;
        }
        if stack.is_empty() {
            stacks.remove(&thread);
        }

        registry.record(frame.key, elapsed, self_time);
    }

    /// Enter a scope that is left when the returned guard drops.
    #[must_use = "the scope closes as soon as the guard is dropped"]
    pub fn scope(&self, key: CallSiteKey) -> ProfileGuard<'_, C> {
        ProfileGuard::new(self, key)
    }

    /// Number of open scopes on the current thread.
    #[must_use]
    pub fn depth(&self) -> usize {
        let thread = thread::current().id();
        self.state.lock().stacks.get(&thread).map_or(0, Vec::len)
    }

    /// Reset all accumulated statistics.
    ///
    /// Open scopes are kept and are recorded normally when they close.
    pub fn clear(&self) {
        self.state.lock().registry.clear();
    }

    /// Copy of the statistics gathered so far.
    #[must_use]
    pub fn snapshot(&self) -> CallSiteRegistry {
        self.state.lock().registry.clone()
    }

    /// Write the report using the configured layout.
    pub fn render<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
        self.render_with(sink, &self.report_config)
    }

    /// Write the report using `config`.
    ///
    /// The statistics are copied first, so the sink may itself be
    /// instrumented with this profiler.
    pub fn render_with<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        config: &ReportConfig,
    ) -> Result<()> {
        let registry = self.snapshot();
        registry.render_with(sink, config)?;
        Ok(())
    }

    /// Write the report to stdout.
    pub fn write_report_to_stdout(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.render(&mut lock)
    }

    /// Write the report to a file, replacing its contents.
    pub fn write_report_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let to_error = |source| Error::ReportFile {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(to_error)?;
        let mut writer = BufWriter::new(file);
        match self.render(&mut writer) {
            Ok(()) => {}
            Err(Error::Io(source)) => return Err(to_error(source)),
            Err(e) => return Err(e),
        }
        writer.flush().map_err(to_error)?;

        tracing::info!(path = %path.display(), "profiler report written");
        Ok(())
    }
}

#[cold]
#[track_caller]
fn unmatched_exit(thread: ThreadId) -> ! {
    panic!("calltally: exit() without a matching enter() on {thread:?}");
}

/// RAII guard for one instrumented scope. Leaves the scope on drop, which
/// includes early returns and panics unwinding through the scope.
#[must_use = "the scope closes as soon as the guard is dropped"]
pub struct ProfileGuard<'a, C: Clock = MonotonicClock> {
    profiler: &'a Profiler<C>,
    // Scopes must close on the thread that opened them.
    _not_send: PhantomData<*const ()>,
}

impl<'a, C: Clock> ProfileGuard<'a, C> {
    /// Enter `key` on `profiler`.
    #[inline]
    pub fn new(profiler: &'a Profiler<C>, key: CallSiteKey) -> Self {
        profiler.enter_site(key);
        Self {
            profiler,
            _not_send: PhantomData,
        }
    }
}

impl<C: Clock> Drop for ProfileGuard<'_, C> {
    #[inline]
    fn drop(&mut self) {
        self.profiler.exit();
    }
}
