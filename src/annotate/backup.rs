//! Pre-annotation backups
//!
//! Backups are keyed by base name only: `<dir>/<file name>.backup`. Two inputs
//! sharing a base name therefore overwrite each other's backup, last one wins.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::AnnotateError;

/// Copies files into a fixed backup directory before they are modified
#[derive(Debug, Clone)]
pub struct BackupStore {
    dir: PathBuf,
}

impl BackupStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Backup directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location the backup of `file` is written to
    pub fn backup_path(&self, file: &Path) -> PathBuf {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string());

        self.dir.join(format!("{name}.backup"))
    }

    /// Copy the current bytes of `file` into the backup directory.
    ///
    /// The directory is created on first use. An existing backup with the
    /// same base name is overwritten.
    pub fn store(&self, file: &Path) -> Result<PathBuf, AnnotateError> {
        fs::create_dir_all(&self.dir).map_err(|e| AnnotateError::BackupDir {
            path: self.dir.display().to_string(),
            source: e,
        })?;

        let backup = self.backup_path(file);
        if backup.exists() {
            debug!(backup = %backup.display(), "Overwriting existing backup");
        }

        fs::copy(file, &backup).map_err(|e| AnnotateError::Backup {
            path: file.display().to_string(),
            backup: backup.display().to_string(),
            source: e,
        })?;

        Ok(backup)
    }
}
