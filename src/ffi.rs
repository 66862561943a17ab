//! Entry points called by generated code
//!
//! Write failures are dropped: generated code has no way to receive them.

use std::ffi::c_char;
use std::io::{self, stdout};

use crate::out;

#[allow(unsafe_code)]
#[unsafe(export_name = "_print_int")]
pub extern "C" fn print_int(x: i32) {
	ignore(out::int_line(&mut stdout().lock(), x));
}

#[allow(unsafe_code)]
#[unsafe(export_name = "_print_float")]
pub extern "C" fn print_float(x: f64) {
	ignore(out::float_line(&mut stdout().lock(), x));
}

#[allow(unsafe_code)]
#[unsafe(export_name = "_print_bool")]
pub extern "C" fn print_bool(x: i32) {
	ignore(out::bool_line(&mut stdout().lock(), x));
}

/// Flushes stdout before returning, so strings built one char at a time show up as they go
#[allow(unsafe_code)]
#[unsafe(export_name = "_print_char")]
pub extern "C" fn print_char(c: c_char) {
	let byte = u8::from_ne_bytes(c.to_ne_bytes());
	ignore(out::raw_char(&mut stdout().lock(), byte));
}

fn ignore(res: io::Result<()>) {
	if let Err(err) = res {
		tracing::trace!(%err, "dropped stdout write failure");
	}
}
