// src/settings.rs

//! Process settings from an optional `Snmpconf.toml`.
//!
//! All fields have defaults, and a missing file is not an error — the tool
//! is expected to run with no settings file at all in the common case.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::pipeline::EvalLimits;

/// Default settings file name, relative to the current working directory.
pub const DEFAULT_SETTINGS_PATH: &str = "Snmpconf.toml";

/// Top-level settings as read from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// `[storage]` section.
    #[serde(default)]
    pub storage: StorageSection,

    /// `[eval]` section.
    #[serde(default)]
    pub eval: EvalSection,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage: StorageSection::default(),
            eval: EvalSection::default(),
        }
    }
}

/// `[storage]` section: where the active/backup pair lives.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSection {
    /// Directory holding the active configuration and its backup.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for StorageSection {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

/// `[eval]` section: bounds on sandbox evaluation.
#[derive(Debug, Clone, Deserialize)]
pub struct EvalSection {
    /// Wall-clock bound on one evaluation, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Step budget for one evaluation.
    #[serde(default = "default_max_steps")]
    pub max_steps: u64,
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_max_steps() -> u64 {
    100_000
}

impl Default for EvalSection {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            max_steps: default_max_steps(),
        }
    }
}

impl Settings {
    pub fn eval_limits(&self) -> EvalLimits {
        EvalLimits {
            timeout: Duration::from_millis(self.eval.timeout_ms),
            max_steps: self.eval.max_steps,
        }
    }
}

/// Load settings from `path`, falling back to defaults if the file does not
/// exist. A present-but-invalid file is an error.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = ?path, "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading settings file at {:?}", path))?;

    let settings: Settings = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML settings from {:?}", path))?;

    Ok(settings)
}
