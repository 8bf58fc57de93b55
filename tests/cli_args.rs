use std::error::Error;

use clap::Parser;
use snmpconf::cli::{CliArgs, Command};
use snmpconf::settings::DEFAULT_SETTINGS_PATH;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn settings_path_defaults_to_the_documented_location() -> TestResult {
    let args = CliArgs::try_parse_from(["snmpconf", "show"])?;

    assert_eq!(args.settings, DEFAULT_SETTINGS_PATH);
    assert!(matches!(args.command, Command::Show));
    Ok(())
}

#[test]
fn settings_path_can_be_overridden() -> TestResult {
    let args = CliArgs::try_parse_from(["snmpconf", "--settings", "custom.toml", "show"])?;

    assert_eq!(args.settings, "custom.toml");
    Ok(())
}
