use std::{ffi::c_char, str::FromStr};

use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber, fmt::time};
use wabbit_rt::{Result, ffi, symbols::PrintKind};

/// Feeds values through the runtime entry points, in order
///
/// A driver for manual and end-to-end checks; generated code only ever sees the entry points.
#[derive(clap::Parser)]
struct Args {
	/// Values as `int:<n>`, `float:<x>`, `bool:<n|true|false>` or `char:<c>`
	#[clap(required = true)]
	pub values: Vec<Value>,

	/// Replay the whole sequence this many times
	#[clap(long, default_value_t = 1)]
	pub repeat: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Value {
	Int(i32),
	Float(f64),
	Bool(i32),
	Char(u8),
}

impl Value {
	const fn kind(self) -> PrintKind {
		match self {
			Self::Int(_) => PrintKind::Int,
			Self::Float(_) => PrintKind::Float,
			Self::Bool(_) => PrintKind::Bool,
			Self::Char(_) => PrintKind::Char,
		}
	}

	fn dispatch(self) {
		match self {
			Self::Int(x) => ffi::print_int(x),
			Self::Float(x) => ffi::print_float(x),
			Self::Bool(x) => ffi::print_bool(x),
			Self::Char(c) => ffi::print_char(c_char::from_ne_bytes([c])),
		}
	}
}

impl FromStr for Value {
	type Err = &'static str;

	fn from_str(s: &str) -> Result<Self> {
		let (kind, raw) = s
			.split_once(':')
			.ok_or("expected `<kind>:<value>`")?;

		match kind {
			"int" => raw.parse().map(Self::Int).map_err(|_| "not a 32-bit integer"),
			"float" => raw.parse().map(Self::Float).map_err(|_| "not a float"),
			"bool" => match raw {
				"true" => Ok(Self::Bool(1)),
				"false" => Ok(Self::Bool(0)),
				raw => raw
					.parse()
					.map(Self::Bool)
					.map_err(|_| "expected `true`, `false` or an integer"),
			},
			"char" => match raw.as_bytes() {
				&[c] => Ok(Self::Char(c)),
				_ => Err("expected a single byte"),
			},
			_ => Err("kind must be one of `int`, `float`, `bool`, `char`"),
		}
	}
}

fn main() {
	FmtSubscriber::builder()
		.with_env_filter(EnvFilter::from_default_env())
		.with_timer(time::Uptime::default())
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();

	for _ in 0..args.repeat {
		for value in &args.values {
			tracing::trace!(kind = %value.kind(), ?value, "dispatch");
			value.dispatch();
		}
	}

	tracing::debug!(count = args.values.len() * args.repeat, "dispatched values");
}
