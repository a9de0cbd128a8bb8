//! Radix selection and digit alphabets.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A supported numeral base.
///
/// Parsing operates over the closed set {8, 10, 16}; any other base is a
/// configuration error, never a parse failure. Use [`Radix::try_from`] to
/// validate a caller-supplied integer base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Radix {
    /// Base 8: digits `'0'..='7'`.
    #[cfg_attr(feature = "clap", value(name = "8"))]
    Octal,
    /// Base 10: digits `'0'..='9'`, with an optional leading `'-'`.
    #[cfg_attr(feature = "clap", value(name = "10"))]
    Decimal,
    /// Base 16: digits `'0'..='9'` plus `'a'..='f'` in either case.
    #[cfg_attr(feature = "clap", value(name = "16"))]
    Hex,
}

impl Radix {
    /// Returns the numeric base.
    pub const fn value(self) -> u32 {
        match self {
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hex => 16,
        }
    }

    /// Map a character to its digit value in this base, if it has one.
    ///
    /// Octal and decimal accept only ASCII digits below the base; hex
    /// additionally accepts `'a'..='f'` and `'A'..='F'` as 10–15. The
    /// sign character is not a digit and always maps to `None`.
    pub const fn digit_value(self, ch: char) -> Option<u32> {
        let code = ch as u32;
        match self {
            Self::Octal => match ch {
                '0'..='7' => Some(code - '0' as u32),
                _ => None,
            },
            Self::Decimal => match ch {
                '0'..='9' => Some(code - '0' as u32),
                _ => None,
            },
            Self::Hex => match ch {
                '0'..='9' => Some(code - '0' as u32),
                'a'..='f' => Some(code - 'a' as u32 + 10),
                'A'..='F' => Some(code - 'A' as u32 + 10),
                _ => None,
            },
        }
    }

    /// Whether a leading `'-'` is part of this base's syntax.
    pub(crate) const fn allows_sign(self) -> bool {
        matches!(self, Self::Decimal)
    }
}

impl TryFrom<u32> for Radix {
    type Error = ParseError;

    /// Validate a caller-supplied base.
    ///
    /// Anything outside {8, 10, 16} is rejected with
    /// [`ParseError::UnsupportedRadix`].
    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            8 => Ok(Self::Octal),
            10 => Ok(Self::Decimal),
            16 => Ok(Self::Hex),
            other => Err(ParseError::UnsupportedRadix(other)),
        }
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
