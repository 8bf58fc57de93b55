use std::error::Error;
use std::fs;

use snmpconf::pipeline::{EvalLimits, Pipeline};
use snmpconf::store::{default_config, ConfigStore};
use snmpconf_test_utils::init_tracing;
use tempfile::tempdir;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn read_on_empty_store_provisions_the_default_once() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let store = ConfigStore::new(dir.path());

    let first = store.read()?;
    assert_eq!(first, default_config());
    assert!(store.active_path().is_file());

    // Scribble a marker into the file; a second read must return it as-is
    // instead of re-provisioning.
    let marked = format!("{first}# marker\n");
    fs::write(store.active_path(), &marked)?;
    assert_eq!(store.read()?, marked);
    Ok(())
}

#[test]
fn bootstrap_does_not_create_a_backup() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let store = ConfigStore::new(dir.path());

    store.read()?;
    assert_eq!(store.backup()?, None);
    Ok(())
}

#[tokio::test]
async fn default_config_passes_the_full_pipeline() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    let pipeline = Pipeline::new(ConfigStore::new(dir.path()), EvalLimits::default());

    let oids = pipeline.check(default_config()).await?;
    assert_eq!(oids.len(), 6);
    assert!(oids.contains_key("1.3.6.1.2.1.1.1.0"));
    Ok(())
}
