//! # Wabbit runtime
//!
//! Output primitives linked into programs produced by the Wabbit backends.

pub mod ffi;
pub mod out;
pub mod symbols;

pub type Result<T> = std::result::Result<T, &'static str>;
