//! Hex and ASCII dumps.

use std::io::{self, Write};

/// Default number of bytes per row.
pub const DEFAULT_COLUMNS: usize = 16;

/// Write a hexdump of `data`, `columns` bytes per row.
///
/// Each row holds the offset in hex, the bytes in two groups of
/// `columns / 2`, and the printable ASCII characters (`.` for the rest).
/// The offset is zero-padded to the number of hex digits of `data.len()`.
/// An odd `columns` is rounded down, and anything below 2 is treated as 2.
pub fn hexdump<W: Write + ?Sized>(out: &mut W, data: &[u8], columns: usize) -> io::Result<()> {
    let half = (columns / 2).max(1);
    let per_row = half * 2;
    let digits = hex_digits(data.len());

    for (row, chunk) in data.chunks(per_row).enumerate() {
        write!(out, "{:0digits$x}", row * per_row)?;
        for group in 0..2 {
            out.write_all(b" ")?;
            for i in group * half..(group + 1) * half {
                match chunk.get(i) {
                    Some(byte) => write!(out, " {byte:02x}")?,
                    None => out.write_all(b"   ")?,
                }
            }
        }
        out.write_all(b"  ")?;
        for &byte in chunk {
            let c = if (32..127).contains(&byte) { byte } else { b'.' };
            out.write_all(&[c])?;
        }
        for _ in chunk.len()..per_row {
            out.write_all(b" ")?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Bytes of a slice of plain-old-data values.
#[must_use]
pub fn pod_bytes<T: bytemuck::Pod>(values: &[T]) -> &[u8] {
    bytemuck::cast_slice(values)
}

fn hex_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 16 {
        n >>= 4;
        digits += 1;
    }
    digits
}
