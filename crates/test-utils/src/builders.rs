#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use snmpconf::pipeline::{EvalLimits, Pipeline};
use snmpconf::store::ConfigStore;

/// A pipeline backed by a throwaway store directory.
///
/// Keeps the `TempDir` alive for the duration of the test and exposes the
/// raw file paths so tests can assert on exact on-disk bytes.
pub struct TempPipeline {
    dir: TempDir,
    pub store: ConfigStore,
    pub pipeline: Pipeline,
}

impl TempPipeline {
    pub fn new() -> Self {
        Self::with_limits(EvalLimits::default())
    }

    pub fn with_limits(limits: EvalLimits) -> Self {
        let dir = tempfile::tempdir().expect("creating temp store dir");
        let store = ConfigStore::new(dir.path());
        let pipeline = Pipeline::new(store.clone(), limits);
        Self {
            dir,
            store,
            pipeline,
        }
    }

    pub fn dir_path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn active_path(&self) -> PathBuf {
        self.store.active_path()
    }

    pub fn backup_path(&self) -> PathBuf {
        self.store.backup_path()
    }

    /// Read the active file directly, bypassing the store's self-healing
    /// bootstrap (returns `None` when the file does not exist).
    pub fn raw_active(&self) -> Option<String> {
        fs::read_to_string(self.active_path()).ok()
    }

    /// Read the backup file directly.
    pub fn raw_backup(&self) -> Option<String> {
        fs::read_to_string(self.backup_path()).ok()
    }
}

impl Default for TempPipeline {
    fn default() -> Self {
        Self::new()
    }
}
