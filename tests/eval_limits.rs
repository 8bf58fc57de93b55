//! Resource bounds: a pathological candidate is rejected with no store
//! mutation, via either the step budget or the wall-clock timeout.

use std::error::Error;
use std::time::Duration;

use snmpconf::errors::{EvalError, PipelineError};
use snmpconf::eval::evaluate;
use snmpconf::pipeline::EvalLimits;
use snmpconf_test_utils::builders::TempPipeline;
use snmpconf_test_utils::{init_tracing, snippets, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn step_budget_bounds_direct_evaluation() {
    let err = evaluate(&snippets::large_candidate(1_000), 50).unwrap_err();
    assert!(matches!(err, EvalError::Budget { steps: 50 }));
}

#[tokio::test]
async fn budget_exhaustion_rejects_without_mutation() -> TestResult {
    init_tracing();
    let t = TempPipeline::with_limits(EvalLimits {
        timeout: Duration::from_secs(5),
        max_steps: 50,
    });
    let before = t.pipeline.read()?;

    let err = t
        .pipeline
        .submit(&snippets::large_candidate(1_000))
        .await
        .expect_err("over-budget candidate must be rejected");

    assert!(matches!(
        err,
        PipelineError::Eval(EvalError::Budget { .. })
    ));
    assert_eq!(t.raw_active().as_deref(), Some(before.as_str()));
    Ok(())
}

#[tokio::test]
async fn timeout_rejects_promptly_without_mutation() -> TestResult {
    init_tracing();
    // An already-expired deadline plus a candidate large enough that the
    // evaluation cannot win the first poll.
    let t = TempPipeline::with_limits(EvalLimits {
        timeout: Duration::ZERO,
        max_steps: u64::MAX,
    });
    let before = t.pipeline.read()?;

    let err = with_timeout(t.pipeline.submit(&snippets::large_candidate(50_000)))
        .await
        .expect_err("timed-out candidate must be rejected");

    assert!(matches!(
        err,
        PipelineError::Eval(EvalError::Timeout { ms: 0 })
    ));
    assert_eq!(t.raw_active().as_deref(), Some(before.as_str()));
    Ok(())
}

#[tokio::test]
async fn generous_limits_accept_a_large_valid_candidate() -> TestResult {
    init_tracing();
    let t = TempPipeline::new();
    let candidate = snippets::large_candidate(1_000);

    let receipt = t.pipeline.submit(&candidate).await?;
    assert_eq!(receipt.entries, 1_000);
    Ok(())
}
