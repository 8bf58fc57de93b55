// src/store/files.rs

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::errors::StorageError;
use crate::store::default::default_config;

/// File name of the active configuration, relative to the store directory.
pub const ACTIVE_FILE: &str = "snmp-data.cfg";

/// File name of the single backup slot. Overwritten on every commit that
/// follows an existing active configuration (last-wins, no history).
pub const BACKUP_FILE: &str = "snmp-data.cfg.bak";

/// Durable holder of the active configuration text.
///
/// Exactly one active snapshot exists at all times after initialization.
/// `commit` either fully succeeds (candidate becomes the active snapshot,
/// the previous text becomes the backup) or fully fails (snapshot
/// unchanged): the candidate is written to a sibling temporary file, synced,
/// and renamed into place, so a crash mid-commit leaves either the old or
/// the new text readable, never a blend.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn active_path(&self) -> PathBuf {
        self.dir.join(ACTIVE_FILE)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.dir.join(BACKUP_FILE)
    }

    /// Return the active configuration text.
    ///
    /// Absence is self-healing: if no active file exists yet, the default
    /// configuration is persisted as the initial snapshot and returned.
    /// "Not found" is never surfaced to the caller.
    pub fn read(&self) -> Result<String, StorageError> {
        let path = self.active_path();
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = ?path, "no active configuration, provisioning default");
                self.write_atomic(default_config())?;
                Ok(default_config().to_string())
            }
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    /// Return the backup slot, or `None` if no commit has produced one yet.
    pub fn backup(&self) -> Result<Option<String>, StorageError> {
        let path = self.backup_path();
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    /// Replace the active configuration with `candidate`.
    ///
    /// The current active text is first copied into the backup slot. That
    /// copy is advisory: a failure is logged and the commit proceeds, since
    /// losing the backup is less harmful than blocking a legitimate change.
    /// The active-file replacement itself is atomic.
    pub fn commit(&self, candidate: &str) -> Result<(), StorageError> {
        if let Err(err) = self.copy_to_backup() {
            warn!(error = %err, "backup write failed; committing without backup");
        }
        self.write_atomic(candidate)?;
        info!(path = ?self.active_path(), bytes = candidate.len(), "configuration committed");
        Ok(())
    }

    fn copy_to_backup(&self) -> Result<(), StorageError> {
        let active = self.active_path();
        if !active.exists() {
            debug!("no active configuration yet, nothing to back up");
            return Ok(());
        }
        let backup = self.backup_path();
        fs::copy(&active, &backup)
            .map_err(|source| StorageError::Backup {
                path: backup.clone(),
                source,
            })?;
        debug!(path = ?backup, "previous configuration backed up");
        Ok(())
    }

    /// Write `contents` to the active path via a temporary sibling file and
    /// an atomic rename. The temporary file is removed on any failure.
    fn write_atomic(&self, contents: &str) -> Result<(), StorageError> {
        if !self.dir.as_os_str().is_empty() {
            fs::create_dir_all(&self.dir).map_err(|source| StorageError::Write {
                path: self.dir.clone(),
                source,
            })?;
        }

        let active = self.active_path();
        let tmp = self.dir.join(format!("{ACTIVE_FILE}.tmp"));

        let result = write_and_sync(&tmp, contents);
        if let Err(source) = result {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::Write { path: tmp, source });
        }

        if let Err(source) = fs::rename(&tmp, &active) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::Replace {
                path: active,
                source,
            });
        }

        debug!(path = ?active, "active configuration replaced atomically");
        Ok(())
    }
}

fn write_and_sync(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    // The rename only counts as a commit once the data is on disk.
    file.sync_all()?;
    Ok(())
}
