use std::error::Error;
use std::fs;
use std::time::Duration;

use snmpconf::settings::{load_or_default, Settings};
use tempfile::tempdir;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn missing_file_falls_back_to_defaults() -> TestResult {
    let dir = tempdir()?;
    let settings = load_or_default(dir.path().join("Snmpconf.toml"))?;

    let defaults = Settings::default();
    assert_eq!(settings.storage.dir, defaults.storage.dir);
    assert_eq!(settings.eval.timeout_ms, defaults.eval.timeout_ms);
    assert_eq!(settings.eval.max_steps, defaults.eval.max_steps);
    Ok(())
}

#[test]
fn partial_file_keeps_defaults_for_missing_fields() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Snmpconf.toml");
    fs::write(&path, "[eval]\ntimeout_ms = 500\n")?;

    let settings = load_or_default(&path)?;
    assert_eq!(settings.eval.timeout_ms, 500);
    assert_eq!(settings.eval.max_steps, Settings::default().eval.max_steps);
    assert_eq!(settings.storage.dir, Settings::default().storage.dir);

    let limits = settings.eval_limits();
    assert_eq!(limits.timeout, Duration::from_millis(500));
    Ok(())
}

#[test]
fn full_file_overrides_everything() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Snmpconf.toml");
    fs::write(
        &path,
        "[storage]\ndir = \"/var/lib/snmpconf\"\n\n[eval]\ntimeout_ms = 100\nmax_steps = 9\n",
    )?;

    let settings = load_or_default(&path)?;
    assert_eq!(settings.storage.dir.to_str(), Some("/var/lib/snmpconf"));
    assert_eq!(settings.eval.timeout_ms, 100);
    assert_eq!(settings.eval.max_steps, 9);
    Ok(())
}

#[test]
fn invalid_toml_is_an_error_not_a_silent_default() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Snmpconf.toml");
    fs::write(&path, "[eval\ntimeout_ms = oops")?;

    assert!(load_or_default(&path).is_err());
    Ok(())
}
