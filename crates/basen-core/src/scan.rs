//! The scan routine shared by the strict and Try parse families.

use crate::error::{FormatError, ParseError, ParseResult};
use crate::radix::Radix;

/// Parse `source` as a base-`radix` numeral into an `i32`.
///
/// Semantics both families rely on:
/// - `None` fails with [`ParseError::MissingInput`].
/// - An empty string is 0, not a failure.
/// - A single leading `'-'` is honored for decimal; any other `'-'`
///   (including all of octal/hex) is an invalid digit at its position.
/// - Any character outside the radix alphabet rejects the whole input.
/// - Accumulation is checked; a magnitude outside the signed 32-bit range
///   fails with [`FormatError::OutOfRange`].
pub(crate) fn scan(source: Option<&str>, radix: Radix) -> ParseResult<i32> {
    let text = source.ok_or(ParseError::MissingInput)?;

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) if radix.allows_sign() => (true, rest),
        _ => (false, text),
    };
    // Positions in errors are counted over the original input.
    let offset = usize::from(negative);

    let base = i64::from(radix.value());
    let mut acc: i64 = 0;
    for (idx, ch) in digits.chars().enumerate() {
        let digit = radix.digit_value(ch).ok_or(FormatError::InvalidDigit {
            ch,
            position: idx + offset,
            radix,
        })?;
        acc = acc
            .checked_mul(base)
            .and_then(|shifted| shifted.checked_add(i64::from(digit)))
            .ok_or(FormatError::OutOfRange { radix })?;
    }

    let value = if negative { -acc } else { acc };
    i32::try_from(value).map_err(|_| FormatError::OutOfRange { radix }.into())
}
