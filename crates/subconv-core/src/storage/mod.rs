//! Disk side of the pipeline: backups and atomic replacement.
//!
//! Every write goes to a uniquely named temp file in the target's directory
//! that is synced and then renamed over the target, so the target is either
//! the old bytes or the new bytes.

mod backup;
mod builder;
mod writer;

pub use backup::{create_backup, Backup};
pub use builder::StagedFileBuilder;
pub use writer::StagedFile;

use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};

/// Path for the backup file: appends `suffix` to the original path.
pub fn backup_path(original: &Path, suffix: &str) -> PathBuf {
    let mut o = original.as_os_str().to_owned();
    o.push(suffix);
    PathBuf::from(o)
}

/// Replace `final_path` with `data` via temp file + rename.
///
/// Permissions are copied from `meta` when given; the mtime too if `keep_mtime`.
/// The temp file is removed if anything fails before the rename.
pub fn write_atomic(
    final_path: &Path,
    data: &[u8],
    meta: Option<&Metadata>,
    keep_mtime: bool,
) -> io::Result<()> {
    let mut builder = StagedFileBuilder::create_for(final_path)?;
    builder.write_all(data)?;
    if let Some(meta) = meta {
        builder.copy_metadata(meta, keep_mtime)?;
    }
    builder.build()?.finalize(final_path)
}
