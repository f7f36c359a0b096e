//! Error types for the normalization pipeline.

use std::io;
use std::path::PathBuf;

/// Errors raised while scanning, reading, backing up or rewriting a file.
///
/// `Traversal` is fatal to the whole run; every other variant is scoped to a
/// single file and ends up as a `FileOutcome::Failed` unless fail-fast is on.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// Root directory is missing or not a directory.
    #[error("cannot scan {}: {reason}", root.display())]
    Traversal { root: PathBuf, reason: String },

    /// An entry below the root could not be visited (permissions, symlink loop).
    #[error("walk failed at {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The file could not be read.
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backup copy could not be written.
    #[error("backup {}: {source}", backup.display())]
    Backup {
        backup: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backup was written but its content does not match the original bytes.
    #[error("backup {} does not match original (expected sha256 {expected}, got {actual})", backup.display())]
    BackupMismatch {
        backup: PathBuf,
        expected: String,
        actual: String,
    },

    /// Writing the UTF-8 text or replacing the original failed.
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl NormalizeError {
    /// Path of the file this error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            NormalizeError::Traversal { root, .. } => root,
            NormalizeError::Walk { path, .. }
            | NormalizeError::Read { path, .. }
            | NormalizeError::Write { path, .. } => path,
            NormalizeError::Backup { backup, .. } | NormalizeError::BackupMismatch { backup, .. } => {
                backup
            }
        }
    }
}

/// Invalid configuration (from TOML or CLI overrides).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown encoding label: {0:?}")]
    UnknownEncoding(String),
    #[error("encoding candidate list is empty")]
    NoCandidates,
    #[error("extension list is empty")]
    NoExtensions,
    #[error("backup suffix must not be empty")]
    EmptyBackupSuffix,
}
