//! Core library for basen.
//!
//! Converts textual numerals in base 8, 10, or 16 into signed 32-bit
//! integers, with strict validation of digit alphabets and sign handling.
//! Two API families cover the same operations:
//!
//! - [`parse`] — strict functions returning [`error::ParseError`] on any
//!   failure, with distinct kinds for missing input, malformed input, and
//!   an unsupported radix.
//! - [`try_parse`] — non-erroring functions returning a `(bool, i32)`
//!   success flag and value (0 on failure).
//!
//! Every function is a pure function of its inputs: no shared state, no
//! I/O, safe to call from any number of threads.
//!
//! # Quick Start
//!
//! ```
//! use basen_core::{parse_decimal, parse_hex, try_parse_octal};
//!
//! assert_eq!(parse_decimal(Some("-42")).unwrap(), -42);
//! assert_eq!(parse_hex(Some("ff")).unwrap(), 255);
//! assert_eq!(try_parse_octal(Some("777")), (true, 511));
//! assert_eq!(try_parse_octal(Some("9")), (false, 0));
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod parse;
pub mod radix;
mod scan;
pub mod try_parse;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, FormatError, ParseError, ParseResult};
pub use parse::{
    parse_by_radix, parse_decimal, parse_hex, parse_octal, parse_positive_by_radix,
    parse_positive_decimal, parse_positive_hex, parse_positive_octal,
};
pub use radix::Radix;
pub use try_parse::{
    try_parse_by_radix, try_parse_decimal, try_parse_hex, try_parse_octal,
    try_parse_positive_by_radix, try_parse_positive_decimal, try_parse_positive_hex,
    try_parse_positive_octal,
};

/// Default cap on input size in bytes (64 KiB).
///
/// A 32-bit value needs at most 11 characters in any supported base; the
/// cap only exists so an embedding application can refuse absurd inputs
/// before handing them to the parser.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024;
