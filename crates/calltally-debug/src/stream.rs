//! Redirectable debug output.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Current destination; `None` means stderr.
static STREAM: Mutex<Option<Box<dyn Write + Send>>> = Mutex::new(None);

/// Send debug output to `writer` instead of stderr.
pub fn set_stream(writer: impl Write + Send + 'static) {
    *STREAM.lock() = Some(Box::new(writer));
    tracing::debug!("debug stream redirected");
}

/// Send debug output back to stderr.
pub fn reset_stream() {
    *STREAM.lock() = None;
}

/// Run `f` with exclusive access to the debug stream.
///
/// Do not print to the debug stream from inside `f`; the stream is locked.
pub fn with_stream<R>(f: impl FnOnce(&mut dyn Write) -> R) -> R {
    let mut stream = STREAM.lock();
    match stream.as_mut() {
        Some(writer) => f(writer.as_mut()),
        None => f(&mut io::stderr().lock()),
    }
}

/// Write a complete message and flush.
pub fn write_message(message: &str) -> io::Result<()> {
    with_stream(|stream| {
        stream.write_all(message.as_bytes())?;
        stream.flush()
    })
}

/// Write a message from one of the printing macros. Failures are logged, not
/// returned.
pub fn emit(message: &str) {
    if let Err(e) = write_message(message) {
        tracing::warn!("failed to write debug message: {}", e);
    }
}

/// `Write` handle for the debug stream.
///
/// Each call locks the stream on its own, so output from several threads may
/// interleave between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugStream;

impl Write for DebugStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        with_stream(|stream| stream.write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        with_stream(|stream| stream.write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        with_stream(|stream| stream.flush())
    }
}

/// Cloneable in-memory writer; all clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Take the contents, leaving the buffer empty.
    #[must_use]
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
