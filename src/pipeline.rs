// src/pipeline.rs

//! The validate-then-commit orchestrator.
//!
//! A submission moves through `Received → Evaluating → Validating →
//! Committing → Committed`, with early exits at each stage. Evaluation and
//! validation are read-only with respect to the store, so the active
//! configuration is untouched by construction until both have passed.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task;
use tokio::time;
use tracing::{debug, info, warn};

use crate::errors::{EvalError, PipelineError};
use crate::eval::{self, Bindings};
use crate::store::ConfigStore;
use crate::validate::{validate_bindings, OidMap};

/// Bounds on one sandbox evaluation.
///
/// The step budget guarantees the evaluation terminates; the wall-clock
/// timeout guarantees the submitter hears about it promptly. Both bounds
/// abort with no store mutation.
#[derive(Debug, Clone, Copy)]
pub struct EvalLimits {
    pub timeout: Duration,
    pub max_steps: u64,
}

impl Default for EvalLimits {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(2000),
            max_steps: 100_000,
        }
    }
}

/// Success marker returned to the editor collaborator after a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    /// blake3 hex digest of the committed text.
    pub digest: String,
    /// Committed text length in bytes.
    pub bytes: usize,
    /// Number of validated `DATA` entries.
    pub entries: usize,
}

/// Composes the evaluator, the validator and the store into the atomic
/// validate-then-commit operation.
#[derive(Debug)]
pub struct Pipeline {
    store: ConfigStore,
    limits: EvalLimits,
    /// Single writer lane: concurrent submissions must not interleave their
    /// backup/overwrite steps. Reads take no lock and rely on the store's
    /// atomic-rename discipline instead.
    commit_lock: Mutex<()>,
}

impl Pipeline {
    pub fn new(store: ConfigStore, limits: EvalLimits) -> Self {
        Self {
            store,
            limits,
            commit_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Return the active configuration text (bootstrapping the default if
    /// none exists yet).
    pub fn read(&self) -> Result<String, PipelineError> {
        Ok(self.store.read()?)
    }

    /// Evaluate and validate a candidate without committing it.
    ///
    /// This is the read-only first half of [`submit`](Self::submit), also
    /// exposed directly so an editor can offer a dry-run check.
    pub async fn check(&self, candidate: &str) -> Result<OidMap, PipelineError> {
        let bindings = self.evaluate(candidate).await?;
        let oids = validate_bindings(&bindings)?;
        debug!(entries = oids.len(), "candidate validated");
        Ok(oids)
    }

    /// Run the full pipeline: evaluate, validate, then durably replace the
    /// active configuration.
    ///
    /// On any failure the active configuration is exactly what it was before
    /// the call; rejections are never retried here, the submitter decides.
    pub async fn submit(&self, candidate: &str) -> Result<CommitReceipt, PipelineError> {
        let oids = self.check(candidate).await?;

        let _guard = self.commit_lock.lock().await;
        if let Err(err) = self.store.commit(candidate) {
            warn!(error = %err, "commit rejected by storage");
            return Err(err.into());
        }

        let digest = blake3::hash(candidate.as_bytes()).to_hex().to_string();
        info!(digest = %digest, entries = oids.len(), "submission committed");
        Ok(CommitReceipt {
            digest,
            bytes: candidate.len(),
            entries: oids.len(),
        })
    }

    /// Run the sandbox evaluator on a worker thread under the wall-clock
    /// timeout.
    ///
    /// Tokio cannot kill a blocking task, but the interpreter's fuel
    /// guarantees the orphaned evaluation still winds down on its own after
    /// a timeout is reported.
    async fn evaluate(&self, candidate: &str) -> Result<Bindings, PipelineError> {
        let source = candidate.to_string();
        let max_steps = self.limits.max_steps;
        let handle = task::spawn_blocking(move || eval::evaluate(&source, max_steps));

        match time::timeout(self.limits.timeout, handle).await {
            Ok(Ok(result)) => Ok(result?),
            Ok(Err(join_err)) => Err(PipelineError::Internal(format!(
                "evaluation task failed: {join_err}"
            ))),
            Err(_elapsed) => Err(EvalError::Timeout {
                ms: self.limits.timeout.as_millis() as u64,
            }
            .into()),
        }
    }
}
