//! Debug printing helpers.
//!
//! Every macro prefixes its output with the source location
//! (`file:line: function`) and writes it to the debug stream, which is
//! stderr unless redirected with [`set_stream`].
//!
//! - [`checkpoint!`]: just the location.
//! - [`message!`]: the location followed by a formatted message.
//! - [`show!`]: `name = value` for each expression, using `Debug`.
//! - [`show_container!`] / [`show_container_flat!`]: the elements of a
//!   collection, one per row or on a single line.
//! - [`hexdump!`]: a hex and ASCII dump of plain-old-data.
//! - [`time_it!`]: the wall-clock time until the end of the enclosing block.

pub mod format;
pub mod hexdump;
mod macros;
pub mod stopwatch;
pub mod stream;

pub use hexdump::hexdump;
pub use stopwatch::{ScopedTimer, Stopwatch};
pub use stream::{reset_stream, set_stream, with_stream, DebugStream, SharedBuffer};
