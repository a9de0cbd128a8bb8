//! Convert command — parse in one base, print in another.

use anyhow::{Context, bail};
use basen_core::config::Config;
use basen_core::{Radix, parse_by_radix};
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Numeral to convert, or '-' to read it from stdin.
    pub numeral: String,

    /// Base to parse in (defaults to the configured radix, then 10)
    #[arg(long, value_enum)]
    pub from: Option<Radix>,

    /// Base to print in
    #[arg(long, value_enum)]
    pub to: Radix,
}

#[derive(Serialize)]
struct ConvertReport {
    input: String,
    from: u32,
    to: u32,
    value: i32,
    output: String,
}

/// Convert a numeral between bases.
#[instrument(name = "cmd_convert", skip_all, fields(from = ?args.from, to = %args.to))]
pub fn cmd_convert(
    args: ConvertArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let numeral = super::resolve_numeral(&args.numeral, max_input)?;
    let from = args
        .from
        .or(config.default_radix)
        .unwrap_or(Radix::Decimal);

    debug!(%from, to = %args.to, "executing convert command");

    let value = parse_by_radix(Some(&numeral), from.value())
        .with_context(|| format!("failed to parse {numeral:?} as base {from}"))?;
    let output = format_in(value, args.to)?;

    if global_json {
        let report = ConvertReport {
            input: numeral,
            from: from.value(),
            to: args.to.value(),
            value,
            output,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{output}");
    }

    Ok(())
}

/// Render a value in the target base.
///
/// Octal and hex alphabets carry no sign character, so only base 10 can
/// express a negative value; anything else is an error rather than a
/// two's-complement bit pattern the parser would refuse to read back.
fn format_in(value: i32, radix: Radix) -> anyhow::Result<String> {
    match radix {
        Radix::Decimal => Ok(format!("{value}")),
        _ if value < 0 => {
            bail!("negative value {value} has no base-{radix} numeral")
        }
        Radix::Octal => Ok(format!("{value:o}")),
        Radix::Hex => Ok(format!("{value:x}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_in_each_base() {
        assert_eq!(format_in(511, Radix::Octal).unwrap(), "777");
        assert_eq!(format_in(255, Radix::Hex).unwrap(), "ff");
        assert_eq!(format_in(-42, Radix::Decimal).unwrap(), "-42");
    }

    #[test]
    fn negative_values_only_format_in_decimal() {
        assert!(format_in(-1, Radix::Octal).is_err());
        assert!(format_in(-1, Radix::Hex).is_err());
    }

    #[test]
    fn zero_formats_everywhere() {
        assert_eq!(format_in(0, Radix::Octal).unwrap(), "0");
        assert_eq!(format_in(0, Radix::Decimal).unwrap(), "0");
        assert_eq!(format_in(0, Radix::Hex).unwrap(), "0");
    }
}
