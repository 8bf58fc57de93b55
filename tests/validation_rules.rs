use std::error::Error;

use snmpconf::errors::ValidationError;
use snmpconf::eval::evaluate;
use snmpconf::validate::validate_bindings;
use snmpconf_test_utils::snippets;

type TestResult = Result<(), Box<dyn Error>>;

const STEPS: u64 = 10_000;

#[test]
fn valid_candidate_yields_all_entries_unchanged() -> TestResult {
    let bindings = evaluate(snippets::VALID_ALL_KINDS, STEPS)?;
    let oids = validate_bindings(&bindings)?;

    assert_eq!(oids.len(), 10);
    // Non-transforming: the stored value is exactly what was evaluated.
    assert_eq!(
        oids.get("1.3.6.1.2.1.1.1.0"),
        Some(&snmpconf::Value::Str("description".into()))
    );
    Ok(())
}

#[test]
fn missing_data_short_circuits_first() -> TestResult {
    let bindings = evaluate("OTHER = [1]\nALSO = 'x'\n", STEPS)?;
    let err = validate_bindings(&bindings).unwrap_err();
    assert!(matches!(err, ValidationError::MissingData));
    Ok(())
}

#[test]
fn wrong_type_reports_what_was_found() -> TestResult {
    for (src, found) in [
        ("DATA = [1]\n", "list"),
        ("DATA = 'x'\n", "string"),
        ("DATA = 5\n", "integer"),
        ("DATA = lambda oid: oid\n", "producer"),
    ] {
        let bindings = evaluate(src, STEPS)?;
        match validate_bindings(&bindings).unwrap_err() {
            ValidationError::WrongType { found: f } => assert_eq!(f, found, "src: {src}"),
            other => panic!("expected WrongType for {src}, got: {other}"),
        }
    }
    Ok(())
}

#[test]
fn oid_key_syntax_is_strict() -> TestResult {
    for good in ["1.3", "1.3.6.1.2.1.1.1.0", "0.0", "255.12.99999"] {
        let bindings = evaluate(&format!("DATA = {{'{good}': 1}}\n"), STEPS)?;
        assert!(validate_bindings(&bindings).is_ok(), "key: {good}");
    }

    for bad in ["1", "1.", ".1.2", "1..3", "a.b", "1.2.x", "1 .2", ""] {
        let bindings = evaluate(&format!("DATA = {{'{bad}': 1}}\n"), STEPS)?;
        match validate_bindings(&bindings).unwrap_err() {
            ValidationError::InvalidEntry { key, .. } => assert_eq!(key, bad),
            other => panic!("expected InvalidEntry for {bad:?}, got: {other}"),
        }
    }
    Ok(())
}

#[test]
fn empty_data_mapping_is_valid() -> TestResult {
    let bindings = evaluate("DATA = {}\n", STEPS)?;
    let oids = validate_bindings(&bindings)?;
    assert!(oids.is_empty());
    Ok(())
}

#[test]
fn revalidation_is_idempotent() -> TestResult {
    let bindings = evaluate(snippets::VALID_ALL_KINDS, STEPS)?;
    let first = validate_bindings(&bindings)?;
    let second = validate_bindings(&bindings)?;
    assert_eq!(first, second);

    let bad = evaluate(snippets::DATA_IS_LIST, STEPS)?;
    let e1 = validate_bindings(&bad).unwrap_err();
    let e2 = validate_bindings(&bad).unwrap_err();
    assert!(matches!(e1, ValidationError::WrongType { found: "list" }));
    assert!(matches!(e2, ValidationError::WrongType { found: "list" }));
    Ok(())
}
