//! Settings file management with atomic writes and backup support.
//!
//! The core parsers work on strings; this module is the thin layer that
//! reads and writes the overlay's files in one settings directory:
//!
//! | File              | Contents                          |
//! |-------------------|-----------------------------------|
//! | `removals.txt`    | removal list                      |
//! | `quickbuild.txt`  | quickbuild slots + rotation step  |
//! | `keybinds.txt`    | keybindings + active modifier     |
//! | `overlay.ini`     | optional `[Keybinds]` overrides   |
//! | `strings.json`    | optional language file            |
//!
//! - **Missing files** load as the default document
//! - **Atomic writes**: temp-file-then-rename, never a half-written file
//! - **Automatic backups**: every save first copies the old file to `backups/`
//!
//! # Example
//!
//! ```no_run
//! use overlay_settings::config::ConfigManager;
//! use overlay_settings::i18n::Localization;
//!
//! let manager = ConfigManager::new("/games/overlay/settings".into())?;
//! let strings = Localization::with_defaults();
//!
//! let mut keybinds = manager.load_keybinds(&strings)?;
//! keybinds.cycle_modifier();
//! manager.save_keybinds(&keybinds)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod transaction;

pub use error::ConfigError;
pub use transaction::ConfigTransaction;

use chrono::Local;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::core::{KeybindSet, QuickBuildLayout, RemovalList};
use crate::i18n::Localization;

/// Files managed inside the settings directory.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SettingsFile {
    Removals,
    QuickBuild,
    Keybinds,
    OverlayIni,
    Strings,
}

impl SettingsFile {
    pub fn file_name(self) -> &'static str {
        match self {
            SettingsFile::Removals => "removals.txt",
            SettingsFile::QuickBuild => "quickbuild.txt",
            SettingsFile::Keybinds => "keybinds.txt",
            SettingsFile::OverlayIni => "overlay.ini",
            SettingsFile::Strings => "strings.json",
        }
    }
}

/// Owns one settings directory and its `backups/` sub-directory.
#[derive(Debug)]
pub struct ConfigManager {
    settings_dir: PathBuf,
    backup_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for an existing settings directory.
    ///
    /// The backup directory is created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the directory doesn't exist.
    /// Returns `ConfigError::BackupDirNotWritable` if the backup directory
    /// cannot be created.
    pub fn new(settings_dir: PathBuf) -> Result<Self, ConfigError> {
        if !settings_dir.is_dir() {
            return Err(ConfigError::NotFound(settings_dir));
        }

        let backup_dir = settings_dir.join("backups");
        if !backup_dir.exists() {
            fs::create_dir_all(&backup_dir)
                .map_err(|_| ConfigError::BackupDirNotWritable(backup_dir.clone()))?;
        }

        if backup_dir.metadata()?.permissions().readonly() {
            return Err(ConfigError::BackupDirNotWritable(backup_dir));
        }

        Ok(Self {
            settings_dir,
            backup_dir,
        })
    }

    pub fn settings_dir(&self) -> &PathBuf {
        &self.settings_dir
    }

    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }

    pub fn path_for(&self, file: SettingsFile) -> PathBuf {
        self.settings_dir.join(file.file_name())
    }

    /// Reads a settings file, `None` if it doesn't exist yet.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; the line parsers skip
    /// whatever no longer matches.
    pub fn read(&self, file: SettingsFile) -> Result<Option<String>, ConfigError> {
        match fs::read(self.path_for(file)) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn load_removals(&self) -> Result<RemovalList, ConfigError> {
        let list = self
            .read(SettingsFile::Removals)?
            .map(|text| RemovalList::from_text(&text))
            .unwrap_or_default();
        log_skipped(SettingsFile::Removals, list.skipped());
        Ok(list)
    }

    pub fn load_quickbuild(&self) -> Result<QuickBuildLayout, ConfigError> {
        let layout = self
            .read(SettingsFile::QuickBuild)?
            .map(|text| QuickBuildLayout::from_text(&text))
            .unwrap_or_default();
        log_skipped(SettingsFile::QuickBuild, layout.skipped());
        Ok(layout)
    }

    /// Loads `keybinds.txt`, then applies `[Keybinds]` from `overlay.ini`.
    pub fn load_keybinds(&self, strings: &Localization) -> Result<KeybindSet, ConfigError> {
        let mut keybinds = self
            .read(SettingsFile::Keybinds)?
            .map(|text| KeybindSet::from_text(&text))
            .unwrap_or_default();
        log_skipped(SettingsFile::Keybinds, keybinds.skipped());

        if let Some(ini) = self.read(SettingsFile::OverlayIni)? {
            let applied = keybinds.apply_ini(&ini, strings);
            debug!(applied, "applied overlay.ini keybind overrides");
        }

        Ok(keybinds)
    }

    /// Defaults merged with `strings.json` when present and valid.
    ///
    /// A missing or broken language file is not an error: the defaults stay.
    pub fn load_strings(&self) -> Localization {
        let mut strings = Localization::with_defaults();
        let path = self.path_for(SettingsFile::Strings);
        if path.exists() {
            // Failure is logged inside and leaves the defaults untouched
            let _ = strings.load_overrides(&path);
        }
        strings
    }

    pub fn save_removals(&self, list: &RemovalList) -> Result<(), ConfigError> {
        ConfigTransaction::begin(self, SettingsFile::Removals)?.commit(&list.to_text())
    }

    pub fn save_quickbuild(&self, layout: &QuickBuildLayout) -> Result<(), ConfigError> {
        ConfigTransaction::begin(self, SettingsFile::QuickBuild)?.commit(&layout.to_text())
    }

    pub fn save_keybinds(&self, keybinds: &KeybindSet) -> Result<(), ConfigError> {
        ConfigTransaction::begin(self, SettingsFile::Keybinds)?.commit(&keybinds.to_text())
    }

    /// Backups of `file`, oldest first.
    pub fn list_backups(&self, file: SettingsFile) -> Result<Vec<PathBuf>, ConfigError> {
        let prefix = format!("{}.", file.file_name());
        let mut backups: Vec<PathBuf> = fs::read_dir(&self.backup_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();
        // Timestamps sort lexicographically
        backups.sort();
        Ok(backups)
    }

    /// Copies the current file to `backups/<name>.<YYYY-MM-DD_HHMMSS>`.
    ///
    /// Returns `None` when the file doesn't exist yet (nothing to back up).
    fn create_timestamped_backup(&self, file: SettingsFile) -> Result<Option<PathBuf>, ConfigError> {
        let source = self.path_for(file);
        let content = match fs::read(&source) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");
        let backup_path = self
            .backup_dir
            .join(format!("{}.{}", file.file_name(), timestamp));

        fs::write(&backup_path, content).map_err(|e| {
            ConfigError::BackupFailed(format!("{}: {}", backup_path.display(), e))
        })?;

        Ok(Some(backup_path))
    }
}

fn log_skipped(file: SettingsFile, skipped: usize) {
    if skipped > 0 {
        warn!(file = file.file_name(), skipped, "skipped malformed lines");
    }
}

#[cfg(test)]
mod tests;
