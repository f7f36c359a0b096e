//! Synced temp file waiting to be renamed over its final path.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// A fully written and synced temp file. `finalize` renames it onto the
/// target path; dropping it instead removes the temp file and leaves the
/// target alone.
pub struct StagedFile {
    tmp: NamedTempFile,
}

impl StagedFile {
    pub(crate) fn from_temp(tmp: NamedTempFile) -> Self {
        Self { tmp }
    }

    /// Atomically rename the temp file to the final path. Consumes the staged file and closes it.
    /// Fails if `final_path` is on a different filesystem (never the case for siblings).
    pub fn finalize(self, final_path: &Path) -> io::Result<()> {
        self.tmp
            .persist(final_path)
            .map(drop)
            .map_err(|e| e.error)
    }
}
