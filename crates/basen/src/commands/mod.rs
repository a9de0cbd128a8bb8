//! Command implementations.

use anyhow::Context;

pub mod convert;
pub mod info;
pub mod parse;

/// Resolve the numeral argument, reading stdin when it is `-`, and
/// validate its size against the configured limit.
///
/// Combines the two steps every parsing command needs. The limit is
/// checked after stdin is drained, so an oversized pipe fails the same
/// way an oversized argument does.
pub fn resolve_numeral(arg: &str, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let text = if arg == "-" {
        let mut buf = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)
            .context("failed to read numeral from stdin")?;
        buf.trim().to_string()
    } else {
        arg.to_string()
    };

    if let Some(max) = max_bytes {
        let size = text.len();
        if size > max {
            anyhow::bail!("input too large: numeral is {size} bytes (limit: {max} bytes)");
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_argument_passes_through() {
        assert_eq!(resolve_numeral("1f4", None).unwrap(), "1f4");
    }

    #[test]
    fn oversized_argument_rejected() {
        let err = resolve_numeral("12345678", Some(4)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn limit_is_inclusive() {
        assert!(resolve_numeral("1234", Some(4)).is_ok());
    }
}
