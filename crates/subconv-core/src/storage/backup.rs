//! Backup copy of the original bytes, made before the original is touched.

use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::config::{BackupConfig, BackupPolicy};
use crate::error::NormalizeError;

use super::{backup_path, write_atomic};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backup {
    pub path: PathBuf,
    /// An existing backup was kept (`BackupPolicy::Keep`) instead of written.
    pub reused: bool,
}

/// Persist `raw` at `<original><suffix>` with the original's permissions and mtime.
///
/// Written through a temp file and renamed, so a failed copy never leaves a
/// truncated backup. With `verify`, the file on disk is hashed and compared
/// with `raw` before returning.
pub fn create_backup(
    original: &Path,
    raw: &[u8],
    meta: &Metadata,
    cfg: &BackupConfig,
) -> Result<Backup, NormalizeError> {
    let path = backup_path(original, &cfg.suffix);

    if cfg.policy == BackupPolicy::Keep && path.exists() {
        tracing::debug!(backup = %path.display(), "keeping existing backup");
        return Ok(Backup { path, reused: true });
    }

    write_atomic(&path, raw, Some(meta), true).map_err(|source| NormalizeError::Backup {
        backup: path.clone(),
        source,
    })?;

    if cfg.verify {
        verify(&path, raw)?;
    }

    Ok(Backup {
        path,
        reused: false,
    })
}

fn verify(path: &Path, raw: &[u8]) -> Result<(), NormalizeError> {
    let expected = checksum::sha256_bytes(raw);
    let actual = checksum::sha256_path(path).map_err(|e| NormalizeError::Backup {
        backup: path.to_path_buf(),
        source: io::Error::other(format!("{e:#}")),
    })?;
    if actual != expected {
        return Err(NormalizeError::BackupMismatch {
            backup: path.to_path_buf(),
            expected,
            actual,
        });
    }
    Ok(())
}
