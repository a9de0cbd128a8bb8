//! Parse command — parse a numeral into its 32-bit signed value.

use anyhow::{Context, bail};
use basen_core::config::Config;
use basen_core::{
    Radix, parse_by_radix, parse_positive_by_radix, try_parse_by_radix,
    try_parse_positive_by_radix,
};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `parse` subcommand.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Numeral to parse, or '-' to read it from stdin.
    pub numeral: String,

    /// Base to parse in (defaults to the configured radix, then 10)
    #[arg(short, long, value_enum)]
    pub radix: Option<Radix>,

    /// Reject negative values (zero also fails with --lenient)
    #[arg(long)]
    pub positive: bool,

    /// Print 0 and exit nonzero on bad input instead of erroring
    #[arg(long)]
    pub lenient: bool,
}

#[derive(Serialize)]
struct ParseReport {
    input: String,
    radix: u32,
    ok: bool,
    value: i32,
}

/// Parse a numeral and print its decimal value.
#[instrument(name = "cmd_parse", skip_all, fields(radix = ?args.radix, lenient = args.lenient))]
pub fn cmd_parse(
    args: ParseArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let numeral = super::resolve_numeral(&args.numeral, max_input)?;
    let radix = args
        .radix
        .or(config.default_radix)
        .unwrap_or(Radix::Decimal);
    let positive = args.positive || config.require_positive;

    debug!(%radix, positive, "executing parse command");

    if args.lenient {
        let (ok, value) = if positive {
            try_parse_positive_by_radix(Some(&numeral), radix.value())
        } else {
            try_parse_by_radix(Some(&numeral), radix.value())
        };

        if global_json {
            let report = ParseReport {
                input: numeral,
                radix: radix.value(),
                ok,
                value,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{value}");
            if !ok {
                bail!("{} is not a valid base-{radix} numeral", numeral.red());
            }
        }
        return Ok(());
    }

    let value = if positive {
        parse_positive_by_radix(Some(&numeral), radix.value())
    } else {
        parse_by_radix(Some(&numeral), radix.value())
    }
    .with_context(|| format!("failed to parse {numeral:?} as base {radix}"))?;

    if global_json {
        let report = ParseReport {
            input: numeral,
            radix: radix.value(),
            ok: true,
            value,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{value}");
    }

    Ok(())
}
