//! Every rejected submission must leave the active configuration untouched,
//! byte for byte.

use std::error::Error;

use snmpconf::errors::{EvalError, PipelineError, ValidationError};
use snmpconf_test_utils::builders::TempPipeline;
use snmpconf_test_utils::{init_tracing, snippets};

type TestResult = Result<(), Box<dyn Error>>;

/// Bootstrap a store, submit a bad candidate, and return the rejection
/// after asserting the active text did not move.
async fn submit_and_expect_rejection(candidate: &str) -> Result<PipelineError, Box<dyn Error>> {
    init_tracing();
    let t = TempPipeline::new();
    let before = t.pipeline.read()?;

    let err = t
        .pipeline
        .submit(candidate)
        .await
        .expect_err("bad candidate must be rejected");

    assert_eq!(t.raw_active().as_deref(), Some(before.as_str()));
    // A rejection never touches the backup slot either.
    assert_eq!(t.raw_backup(), None);
    Ok(err)
}

#[tokio::test]
async fn missing_data_binding_is_rejected() -> TestResult {
    let err = submit_and_expect_rejection(snippets::MISSING_DATA).await?;
    assert!(matches!(
        err,
        PipelineError::Validation(ValidationError::MissingData)
    ));
    Ok(())
}

#[tokio::test]
async fn data_as_list_is_rejected() -> TestResult {
    let err = submit_and_expect_rejection(snippets::DATA_IS_LIST).await?;
    assert!(matches!(
        err,
        PipelineError::Validation(ValidationError::WrongType { found: "list" })
    ));
    Ok(())
}

#[tokio::test]
async fn unterminated_mapping_is_a_syntax_rejection() -> TestResult {
    let err = submit_and_expect_rejection(snippets::BROKEN_SYNTAX).await?;
    assert!(matches!(
        err,
        PipelineError::Eval(EvalError::Syntax { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn non_oid_key_is_rejected() -> TestResult {
    let err = submit_and_expect_rejection("DATA = {'hello': 1}\n").await?;
    match err {
        PipelineError::Validation(ValidationError::InvalidEntry { key, .. }) => {
            assert_eq!(key, "hello");
        }
        other => panic!("expected InvalidEntry, got: {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn non_string_key_is_rejected() -> TestResult {
    let err = submit_and_expect_rejection("DATA = {1: 'x'}\n").await?;
    assert!(matches!(
        err,
        PipelineError::Validation(ValidationError::InvalidEntry { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn nested_collection_value_is_rejected() -> TestResult {
    let err = submit_and_expect_rejection("DATA = {'1.2.3': [1, 2]}\n").await?;
    match err {
        PipelineError::Validation(ValidationError::InvalidEntry { key, reason }) => {
            assert_eq!(key, "1.2.3");
            assert!(reason.contains("list"));
        }
        other => panic!("expected InvalidEntry, got: {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn duplicate_oid_key_is_rejected_at_evaluation() -> TestResult {
    let candidate = "DATA = {'1.2.3': 'a', '1.2.3': 'b'}\n";
    let err = submit_and_expect_rejection(candidate).await?;
    assert!(matches!(err, PipelineError::Eval(EvalError::Runtime(_))));
    Ok(())
}

#[tokio::test]
async fn unknown_helper_call_is_rejected() -> TestResult {
    let err = submit_and_expect_rejection("DATA = {'1.2.3': open('/etc/passwd')}\n").await?;
    match err {
        PipelineError::Eval(EvalError::Runtime(msg)) => {
            assert!(msg.contains("open"));
        }
        other => panic!("expected a runtime rejection, got: {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn import_attempt_is_a_syntax_rejection() -> TestResult {
    // `import` is just an identifier here; with no `=` after it the
    // statement grammar rejects the line outright.
    let err = submit_and_expect_rejection("import os\nDATA = {}\n").await?;
    assert!(matches!(
        err,
        PipelineError::Eval(EvalError::Syntax { .. })
    ));
    Ok(())
}
