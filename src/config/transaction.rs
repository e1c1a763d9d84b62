// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Settings file transaction with automatic backups
//!
//! Provides atomic replacement of one settings file.

use atomic_write_file::AtomicWriteFile;
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::config::{ConfigError, ConfigManager, SettingsFile};

/// Atomic replacement of one settings file with automatic backup.
///
/// # Lifecycle
///
/// 1. `begin()` - Copies the current file to `backups/` (if it exists)
/// 2. Caller serializes the new document in memory
/// 3. `commit()` - Writes atomically, or `rollback()` - Restores the backup
///
/// # Example
///
/// ```no_run
/// use overlay_settings::config::{ConfigManager, ConfigTransaction, SettingsFile};
/// use std::path::PathBuf;
///
/// let manager = ConfigManager::new(PathBuf::from("settings"))?;
/// let tx = ConfigTransaction::begin(&manager, SettingsFile::Removals)?;
///
/// match tx.commit("@PWM_Quarry_2x2\n") {
///     Ok(()) => println!("Removal list saved"),
///     Err(e) => eprintln!("Save failed: {}", e),
/// }
/// # Ok::<(), overlay_settings::config::ConfigError>(())
/// ```
pub struct ConfigTransaction<'a> {
    manager: &'a ConfigManager,
    file: SettingsFile,
    backup_path: Option<PathBuf>,
}

impl<'a> ConfigTransaction<'a> {
    /// Begins a transaction by backing up the current file.
    ///
    /// A file that doesn't exist yet has no backup; rolling back then
    /// removes whatever was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the current file cannot be read or the backup
    /// cannot be written. Nothing has been modified in that case.
    pub fn begin(manager: &'a ConfigManager, file: SettingsFile) -> Result<Self, ConfigError> {
        let backup_path = manager.create_timestamped_backup(file)?;
        if let Some(path) = &backup_path {
            debug!(backup = %path.display(), "created settings backup");
        }

        Ok(Self {
            manager,
            file,
            backup_path,
        })
    }

    /// Backup created by `begin()`, if the file existed.
    pub fn backup_path(&self) -> Option<&Path> {
        self.backup_path.as_deref()
    }

    /// Atomically replaces the file with `new_content`.
    ///
    /// Consumes the transaction, preventing accidental double-commits. On
    /// error the original file is unchanged and the backup is still there.
    pub fn commit(self, new_content: &str) -> Result<(), ConfigError> {
        write_atomic(&self.manager.path_for(self.file), new_content.as_bytes())
    }

    /// Restores the file to its state when the transaction began.
    ///
    /// Borrows `self`, so rollback can be retried after a failure.
    pub fn rollback(&self) -> Result<(), ConfigError> {
        let target = self.manager.path_for(self.file);

        match &self.backup_path {
            Some(backup_path) => {
                let backup_content = fs::read(backup_path)?;
                write_atomic(&target, &backup_content)
            }
            // The file didn't exist before the transaction
            None => match fs::remove_file(&target) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            },
        }
    }
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ConfigError> {
    let mut file = AtomicWriteFile::options()
        .open(path)
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e)))?;

    file.write_all(content)
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

    file.commit()
        .map_err(|e| ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e)))?;

    Ok(())
}
