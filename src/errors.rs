// src/errors.rs

//! Crate-wide error taxonomy.
//!
//! Every stage of the pipeline has its own structured error type, and
//! [`PipelineError`] wraps them at the orchestration boundary so the editor
//! collaborator always receives a human-readable rejection rather than a raw
//! panic or an untyped string.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while evaluating candidate configuration source in the sandbox.
#[derive(Error, Debug)]
pub enum EvalError {
    /// The candidate is not well-formed in the restricted expression grammar.
    #[error("syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: u32, col: u32, msg: String },

    /// The candidate parsed but evaluation failed (unknown name, helper
    /// argument of the wrong type, duplicate key, ...).
    #[error("evaluation error: {0}")]
    Runtime(String),

    /// Evaluation ran out of its step budget before producing bindings.
    #[error("evaluation exceeded the step budget of {steps} steps")]
    Budget { steps: u64 },

    /// Evaluation exceeded the wall-clock bound enforced by the pipeline.
    #[error("evaluation timed out after {ms} ms")]
    Timeout { ms: u64 },
}

/// Failure while checking the shape of evaluated bindings.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// No top-level `DATA` binding was produced.
    #[error("configuration must define a DATA mapping")]
    MissingData,

    /// `DATA` exists but is not a mapping.
    #[error("DATA must be a mapping, found {found}")]
    WrongType { found: &'static str },

    /// A specific `DATA` entry has a bad key or an unsupported value.
    #[error("invalid DATA entry '{key}': {reason}")]
    InvalidEntry { key: String, reason: String },
}

/// Failure while reading or replacing the durable configuration files.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("reading {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// Backup-slot write failed. Advisory: `ConfigStore::commit` logs this
    /// and proceeds; it never aborts a commit.
    #[error("backing up {path:?}: {source}")]
    Backup { path: PathBuf, source: io::Error },

    #[error("writing {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },

    /// The final rename of the temporary file onto the active path failed.
    #[error("replacing {path:?}: {source}")]
    Replace { path: PathBuf, source: io::Error },
}

/// Top-level outcome of a submission, as seen by the editor collaborator.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("rejected: {0}")]
    Eval(#[from] EvalError),

    #[error("rejected: {0}")]
    Validation(#[from] ValidationError),

    #[error("commit failed: {0}")]
    Storage(#[from] StorageError),

    /// Anything unexpected inside the orchestration itself (e.g. a panicked
    /// evaluation task). Never carries candidate-controlled detail.
    #[error("internal pipeline failure: {0}")]
    Internal(String),
}

pub use anyhow::{Error, Result};
