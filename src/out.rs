//! Rendering of runtime values into their output literals
//!
//! Every function writes to any [`Write`] so the literals can be checked
//! against in-memory buffers. The `ffi` entry points hand them a locked stdout.

use std::fmt;
use std::io::{self, Write};

/// Prefix of every line-oriented literal
pub const PREFIX: &str = "Out: ";

/// Writes `Out: <x>` and a newline
pub fn int_line(w: &mut impl Write, x: i32) -> io::Result<()> {
	writeln!(w, "{PREFIX}{x}")
}

/// Writes `Out: <x>` in `%f` form and a newline
pub fn float_line(w: &mut impl Write, x: f64) -> io::Result<()> {
	writeln!(w, "{PREFIX}{}", Fixed(x))
}

/// Writes `Out: true` for any nonzero `x`, `Out: false` otherwise
pub fn bool_line(w: &mut impl Write, x: i32) -> io::Result<()> {
	writeln!(w, "{PREFIX}{}", x != 0)
}

/// Writes the raw byte with no newline, then flushes `w`
pub fn raw_char(w: &mut impl Write, c: u8) -> io::Result<()> {
	w.write_all(&[c])?;
	w.flush()
}

/// A double displayed like printf's `%f`
///
/// Six fractional digits, no exponent, and a sign on negative zero. Rust
/// already agrees with glibc for finite values and infinities; only NaN is
/// spelled differently.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub f64);

impl fmt::Display for Fixed {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let x = self.0;
		if x.is_nan() {
			f.write_str(if x.is_sign_negative() { "-nan" } else { "nan" })
		} else {
			write!(f, "{x:.6}")
		}
	}
}
