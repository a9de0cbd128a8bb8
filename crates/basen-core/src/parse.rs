//! Strict parse family.
//!
//! Every function here reports failure through [`ParseError`], keeping
//! missing input, malformed input, and an unsupported radix distinct.
//! The non-erroring counterparts live in [`crate::try_parse`].

use crate::error::{FormatError, ParseResult};
use crate::radix::Radix;
use crate::scan::scan;

/// Parse an octal numeral (`'0'..='7'`) into a signed 32-bit integer.
///
/// An empty string is 0. Octal has no sign character, so the result is
/// always non-negative.
pub fn parse_octal(source: Option<&str>) -> ParseResult<i32> {
    scan(source, Radix::Octal)
}

/// Parse a decimal numeral (`'0'..='9'`, optional leading `'-'`) into a
/// signed 32-bit integer.
///
/// An empty string is 0. A `'-'` anywhere other than the first position
/// is rejected as an invalid digit.
pub fn parse_decimal(source: Option<&str>) -> ParseResult<i32> {
    scan(source, Radix::Decimal)
}

/// Parse a hexadecimal numeral (`'0'..='9'`, `'a'..='f'` in either case)
/// into a signed 32-bit integer.
///
/// An empty string is 0. Hex has no sign character, so the result is
/// always non-negative.
pub fn parse_hex(source: Option<&str>) -> ParseResult<i32> {
    scan(source, Radix::Hex)
}

/// [`parse_octal`], additionally rejecting negative results.
///
/// Octal syntax cannot produce a negative value, so this only differs
/// from [`parse_octal`] by the documented contract.
pub fn parse_positive_octal(source: Option<&str>) -> ParseResult<i32> {
    require_non_negative(parse_octal(source)?)
}

/// [`parse_decimal`], additionally rejecting negative results.
///
/// Zero is accepted; only values below zero fail, and they fail with the
/// invalid-format kind rather than a kind of their own.
pub fn parse_positive_decimal(source: Option<&str>) -> ParseResult<i32> {
    require_non_negative(parse_decimal(source)?)
}

/// [`parse_hex`], additionally rejecting negative results.
pub fn parse_positive_hex(source: Option<&str>) -> ParseResult<i32> {
    require_non_negative(parse_hex(source)?)
}

/// Parse in a caller-supplied base.
///
/// `radix` must be 8, 10, or 16; anything else fails with
/// [`crate::error::ParseError::UnsupportedRadix`] before the input is
/// looked at.
#[tracing::instrument(level = "debug", skip(source), fields(len = source.map_or(0, str::len)))]
pub fn parse_by_radix(source: Option<&str>, radix: u32) -> ParseResult<i32> {
    match Radix::try_from(radix)? {
        Radix::Octal => parse_octal(source),
        Radix::Decimal => parse_decimal(source),
        Radix::Hex => parse_hex(source),
    }
}

/// Parse in a caller-supplied base, rejecting negative results.
///
/// Same radix validation as [`parse_by_radix`].
#[tracing::instrument(level = "debug", skip(source), fields(len = source.map_or(0, str::len)))]
pub fn parse_positive_by_radix(source: Option<&str>, radix: u32) -> ParseResult<i32> {
    match Radix::try_from(radix)? {
        Radix::Octal => parse_positive_octal(source),
        Radix::Decimal => parse_positive_decimal(source),
        Radix::Hex => parse_positive_hex(source),
    }
}

fn require_non_negative(value: i32) -> ParseResult<i32> {
    if value < 0 {
        Err(FormatError::Negative { value }.into())
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn octal_positional_values() {
        assert_eq!(parse_octal(Some("17")).unwrap(), 15);
        assert_eq!(parse_octal(Some("0")).unwrap(), 0);
        assert_eq!(parse_octal(Some("777")).unwrap(), 511);
    }

    #[test]
    fn octal_rejects_eight_and_nine() {
        assert!(matches!(
            parse_octal(Some("18")),
            Err(ParseError::InvalidFormat(FormatError::InvalidDigit {
                ch: '8',
                position: 1,
                ..
            }))
        ));
    }

    #[test]
    fn decimal_signed_values() {
        assert_eq!(parse_decimal(Some("-42")).unwrap(), -42);
        assert_eq!(parse_decimal(Some("42")).unwrap(), 42);
        assert_eq!(parse_decimal(Some("")).unwrap(), 0);
    }

    #[test]
    fn hex_is_case_insensitive() {
        assert_eq!(parse_hex(Some("FF")).unwrap(), 255);
        assert_eq!(parse_hex(Some("ff")).unwrap(), 255);
        assert_eq!(parse_hex(Some("1A")).unwrap(), 26);
    }

    #[test]
    fn missing_input_fails_per_radix_function() {
        assert_eq!(parse_octal(None), Err(ParseError::MissingInput));
        assert_eq!(parse_decimal(None), Err(ParseError::MissingInput));
        assert_eq!(parse_hex(None), Err(ParseError::MissingInput));
    }

    #[test]
    fn positive_rejects_negative_as_format_error() {
        // "-5" is well-formed decimal; the rejection is about the value.
        assert_eq!(
            parse_positive_decimal(Some("-5")),
            Err(ParseError::InvalidFormat(FormatError::Negative {
                value: -5
            }))
        );
    }

    #[test]
    fn positive_accepts_zero() {
        // The strict family draws the line at negative, not at zero.
        assert_eq!(parse_positive_decimal(Some("0")).unwrap(), 0);
        assert_eq!(parse_positive_decimal(Some("-0")).unwrap(), 0);
        assert_eq!(parse_positive_octal(Some("0")).unwrap(), 0);
        assert_eq!(parse_positive_hex(Some("0")).unwrap(), 0);
    }

    #[test]
    fn by_radix_dispatches_on_alphabet() {
        assert_eq!(parse_by_radix(Some("A"), 16).unwrap(), 10);
        assert!(matches!(
            parse_by_radix(Some("A"), 10),
            Err(ParseError::InvalidFormat(FormatError::InvalidDigit {
                ch: 'A',
                ..
            }))
        ));
    }

    #[test]
    fn by_radix_validates_the_radix_first() {
        assert_eq!(
            parse_by_radix(Some("123"), 7),
            Err(ParseError::UnsupportedRadix(7))
        );
        assert_eq!(
            parse_positive_by_radix(Some("123"), 2),
            Err(ParseError::UnsupportedRadix(2))
        );
    }

    #[test]
    fn positive_by_radix_matches_the_positive_variants() {
        assert_eq!(parse_positive_by_radix(Some("ff"), 16).unwrap(), 255);
        assert!(parse_positive_by_radix(Some("-1"), 10).is_err());
    }

    #[test]
    fn round_trip_spot_checks() {
        for n in [0, 1, 7, 8, 15, 16, 255, 511, 4096, 65535, 1_000_000, i32::MAX] {
            assert_eq!(parse_octal(Some(&format!("{n:o}"))).unwrap(), n);
            assert_eq!(parse_decimal(Some(&format!("{n}"))).unwrap(), n);
            assert_eq!(parse_hex(Some(&format!("{n:x}"))).unwrap(), n);
            assert_eq!(parse_hex(Some(&format!("{n:X}"))).unwrap(), n);
        }
    }
}
