//! Error types for basen-core.

use thiserror::Error;

use crate::radix::Radix;

/// Errors produced when parsing a numeral string.
///
/// Three distinct kinds: input that was never supplied, input that was
/// supplied but is not a valid numeral, and a radix outside the supported
/// set. The last one can only come from the `*_by_radix` dispatchers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No input was supplied at all.
    #[error("missing input: no numeral to parse")]
    MissingInput,

    /// Input was present but is not a valid numeral.
    #[error("invalid numeral: {0}")]
    InvalidFormat(#[from] FormatError),

    /// The requested base is outside the supported set {8, 10, 16}.
    #[error("unsupported radix {0} (expected 8, 10, or 16)")]
    UnsupportedRadix(u32),
}

/// Detail for [`ParseError::InvalidFormat`].
///
/// Invalid characters, out-of-range magnitudes, and negative values where
/// a positive one was required all surface as the same invalid-format
/// failure; the variant records which it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A character outside the radix alphabet.
    #[error("'{ch}' is not a valid base-{radix} digit (position {position})")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Character position in the input, counted from the front.
        position: usize,
        /// The radix the input was parsed in.
        radix: Radix,
    },

    /// The value does not fit in a signed 32-bit integer.
    #[error("value does not fit in 32 bits (base {radix})")]
    OutOfRange {
        /// The radix the input was parsed in.
        radix: Radix,
    },

    /// A negative value where a positive one was required.
    #[error("expected a positive value, got {value}")]
    Negative {
        /// The parsed value that was rejected.
        value: i32,
    },
}

/// Result type alias using [`ParseError`].
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_digit_message_names_character_and_position() {
        let err = ParseError::from(FormatError::InvalidDigit {
            ch: 'z',
            position: 3,
            radix: Radix::Hex,
        });
        let message = err.to_string();
        assert!(message.contains("'z'"), "message: {message}");
        assert!(message.contains("base-16"), "message: {message}");
        assert!(message.contains("position 3"), "message: {message}");
    }

    #[test]
    fn unsupported_radix_message_lists_supported_set() {
        let message = ParseError::UnsupportedRadix(7).to_string();
        assert!(message.contains('7'), "message: {message}");
        assert!(message.contains("8, 10, or 16"), "message: {message}");
    }

    #[test]
    fn format_error_converts_into_parse_error() {
        let err: ParseError = FormatError::Negative { value: -5 }.into();
        assert!(matches!(
            err,
            ParseError::InvalidFormat(FormatError::Negative { value: -5 })
        ));
    }
}
