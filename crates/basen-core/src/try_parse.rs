//! Try parse family.
//!
//! Non-erroring counterparts of [`crate::parse`]: each function returns a
//! `(bool, i32)` success flag and value, with the value pinned to 0 on
//! failure. Malformed and missing input both come back as `(false, 0)`.
//!
//! The one exception is the radix itself: the `*_by_radix` dispatchers
//! panic on a base outside {8, 10, 16}, because the radix is caller
//! configuration rather than parsed data.

use crate::error::ParseResult;
use crate::parse;
use crate::radix::Radix;

/// Non-erroring form of [`parse::parse_octal`].
pub fn try_parse_octal(source: Option<&str>) -> (bool, i32) {
    to_flag(parse::parse_octal(source))
}

/// Non-erroring form of [`parse::parse_decimal`].
pub fn try_parse_decimal(source: Option<&str>) -> (bool, i32) {
    to_flag(parse::parse_decimal(source))
}

/// Non-erroring form of [`parse::parse_hex`].
pub fn try_parse_hex(source: Option<&str>) -> (bool, i32) {
    to_flag(parse::parse_hex(source))
}

/// Non-erroring octal parse that also requires a strictly positive value.
///
/// Unlike the strict `parse_positive_*` family, zero fails here: success
/// means `value > 0`.
pub fn try_parse_positive_octal(source: Option<&str>) -> (bool, i32) {
    strictly_positive(try_parse_octal(source))
}

/// Non-erroring decimal parse that also requires a strictly positive value.
///
/// Unlike the strict `parse_positive_*` family, zero fails here: success
/// means `value > 0`.
pub fn try_parse_positive_decimal(source: Option<&str>) -> (bool, i32) {
    strictly_positive(try_parse_decimal(source))
}

/// Non-erroring hex parse that also requires a strictly positive value.
///
/// Unlike the strict `parse_positive_*` family, zero fails here: success
/// means `value > 0`.
pub fn try_parse_positive_hex(source: Option<&str>) -> (bool, i32) {
    strictly_positive(try_parse_hex(source))
}

/// Non-erroring parse in a caller-supplied base.
///
/// # Panics
///
/// Panics if `radix` is not 8, 10, or 16. An unsupported radix is a bug
/// in the caller, not bad input data, so it is not folded into the
/// `(false, 0)` channel — the same line `i32::from_str_radix` draws.
#[tracing::instrument(level = "debug", skip(source), fields(len = source.map_or(0, str::len)))]
pub fn try_parse_by_radix(source: Option<&str>, radix: u32) -> (bool, i32) {
    match supported_radix(radix) {
        Radix::Octal => try_parse_octal(source),
        Radix::Decimal => try_parse_decimal(source),
        Radix::Hex => try_parse_hex(source),
    }
}

/// Non-erroring positive parse in a caller-supplied base.
///
/// # Panics
///
/// Panics if `radix` is not 8, 10, or 16, as [`try_parse_by_radix`] does.
#[tracing::instrument(level = "debug", skip(source), fields(len = source.map_or(0, str::len)))]
pub fn try_parse_positive_by_radix(source: Option<&str>, radix: u32) -> (bool, i32) {
    match supported_radix(radix) {
        Radix::Octal => try_parse_positive_octal(source),
        Radix::Decimal => try_parse_positive_decimal(source),
        Radix::Hex => try_parse_positive_hex(source),
    }
}

fn supported_radix(radix: u32) -> Radix {
    match Radix::try_from(radix) {
        Ok(radix) => radix,
        Err(_) => panic!("unsupported radix {radix}, expected 8, 10, or 16"),
    }
}

fn to_flag(result: ParseResult<i32>) -> (bool, i32) {
    match result {
        Ok(value) => (true, value),
        Err(_) => (false, 0),
    }
}

const fn strictly_positive((ok, value): (bool, i32)) -> (bool, i32) {
    if ok && value > 0 { (true, value) } else { (false, 0) }
}
