use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during settings file management.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings directory does not exist.
    #[error("Settings directory not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Backup directory cannot be created or written to.
    #[error("Backup directory not writable: {}", .0.display())]
    BackupDirNotWritable(PathBuf),
    /// Failed to create backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
