//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Parse Command
// =============================================================================

#[test]
fn parse_defaults_to_decimal() {
    cmd()
        .args(["parse", "42"])
        .assert()
        .success()
        .stdout(predicate::str::diff("42\n"));
}

#[test]
fn parse_negative_decimal() {
    cmd()
        .args(["parse", "--", "-42"])
        .assert()
        .success()
        .stdout(predicate::str::diff("-42\n"));
}

#[test]
fn parse_octal() {
    cmd()
        .args(["parse", "777", "--radix", "8"])
        .assert()
        .success()
        .stdout(predicate::str::diff("511\n"));
}

#[test]
fn parse_hex_either_case() {
    cmd()
        .args(["parse", "FF", "--radix", "16"])
        .assert()
        .success()
        .stdout(predicate::str::diff("255\n"));
    cmd()
        .args(["parse", "ff", "--radix", "16"])
        .assert()
        .success()
        .stdout(predicate::str::diff("255\n"));
}

#[test]
fn parse_empty_string_is_zero() {
    cmd()
        .args(["parse", ""])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn parse_invalid_digit_fails() {
    cmd()
        .args(["parse", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid base-10 digit"));
}

#[test]
fn parse_octal_rejects_nine() {
    cmd()
        .args(["parse", "19", "--radix", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("base-8"));
}

#[test]
fn parse_positive_rejects_negative_value() {
    cmd()
        .args(["parse", "--positive", "--", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn parse_positive_accepts_zero() {
    cmd()
        .args(["parse", "--positive", "0"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn parse_overflow_fails() {
    cmd()
        .args(["parse", "2147483648"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("32 bits"));
}

#[test]
fn parse_min_value_succeeds() {
    cmd()
        .args(["parse", "--", "-2147483648"])
        .assert()
        .success()
        .stdout(predicate::str::diff("-2147483648\n"));
}

#[test]
fn parse_reads_stdin_dash() {
    cmd()
        .args(["parse", "-", "--radix", "16"])
        .write_stdin("1a\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("26\n"));
}

#[test]
fn parse_json_reports_value() {
    let output = cmd()
        .args(["parse", "ff", "--radix", "16", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("parse --json should output valid JSON");
    assert_eq!(json["radix"], 16);
    assert_eq!(json["ok"], true);
    assert_eq!(json["value"], 255);
}

// =============================================================================
// Parse Command: --lenient
// =============================================================================

#[test]
fn lenient_prints_zero_and_fails_on_bad_input() {
    cmd()
        .args(["parse", "--lenient", "xyz"])
        .assert()
        .failure()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn lenient_succeeds_on_good_input() {
    cmd()
        .args(["parse", "--lenient", "42"])
        .assert()
        .success()
        .stdout(predicate::str::diff("42\n"));
}

#[test]
fn lenient_positive_rejects_zero() {
    // Strictly positive: zero is a failure in lenient mode.
    cmd()
        .args(["parse", "--lenient", "--positive", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn lenient_json_reports_failure_without_erroring() {
    let output = cmd()
        .args(["parse", "--lenient", "xyz", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["value"], 0);
}

// =============================================================================
// Convert Command
// =============================================================================

#[test]
fn convert_decimal_to_hex() {
    cmd()
        .args(["convert", "255", "--to", "16"])
        .assert()
        .success()
        .stdout(predicate::str::diff("ff\n"));
}

#[test]
fn convert_hex_to_octal() {
    cmd()
        .args(["convert", "ff", "--from", "16", "--to", "8"])
        .assert()
        .success()
        .stdout(predicate::str::diff("377\n"));
}

#[test]
fn convert_negative_to_hex_fails() {
    cmd()
        .args(["convert", "--to", "16", "--", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn convert_negative_to_decimal_is_fine() {
    cmd()
        .args(["convert", "--from", "10", "--to", "10", "--", "-42"])
        .assert()
        .success()
        .stdout(predicate::str::diff("-42\n"));
}

#[test]
fn convert_json_includes_both_bases() {
    let output = cmd()
        .args(["convert", "777", "--from", "8", "--to", "16", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["from"], 8);
    assert_eq!(json["to"], 16);
    assert_eq!(json["value"], 511);
    assert_eq!(json["output"], "1ff");
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flags_accepted() {
    cmd().args(["-v", "info"]).assert().success();
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_choices_accepted() {
    for choice in ["auto", "always", "never"] {
        cmd().args(["--color", choice, "info"]).assert().success();
    }
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn unsupported_radix_value_rejected_by_clap() {
    // value_enum restricts --radix to 8|10|16 at argument-parsing time
    cmd()
        .args(["parse", "123", "--radix", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// =============================================================================
// Chdir Flag
// =============================================================================

#[test]
fn chdir_flag_changes_directory() {
    cmd().args(["-C", "/tmp", "info"]).assert().success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
