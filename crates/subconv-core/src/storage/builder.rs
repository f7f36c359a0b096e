//! Builder for the temp file that will replace a target path.

use std::fs::Metadata;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use super::writer::StagedFile;

/// Prefix and suffix of the uniquely named temp files.
const TEMP_PREFIX: &str = ".subconv-";
const TEMP_SUFFIX: &str = ".part";

/// Builder for a new temp file. Write the content, optionally copy metadata
/// from the file being replaced, then `build` (which syncs) to get a
/// `StagedFile` ready to be renamed into place.
pub struct StagedFileBuilder {
    tmp: NamedTempFile,
}

impl StagedFileBuilder {
    /// Create a fresh, uniquely named temp file next to `final_path`
    /// (e.g. `.subconv-a1B2c3.part`). Never opens an existing file.
    pub fn create_for(final_path: &Path) -> io::Result<Self> {
        let dir = match final_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let tmp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(TEMP_SUFFIX)
            .tempfile_in(dir)?;
        Ok(StagedFileBuilder { tmp })
    }

    pub fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.tmp.write_all(data)
    }

    /// Copy permissions (and the modification time when `keep_mtime`) from `meta`.
    /// Call after the last write so the mtime is not bumped again.
    pub fn copy_metadata(&mut self, meta: &Metadata, keep_mtime: bool) -> io::Result<()> {
        let file = self.tmp.as_file();
        file.set_permissions(meta.permissions())?;
        if keep_mtime {
            if let Ok(mtime) = meta.modified() {
                file.set_modified(mtime)?;
            }
        }
        Ok(())
    }

    /// Sync data to disk and hand over the staged file.
    pub fn build(self) -> io::Result<StagedFile> {
        self.tmp.as_file().sync_all()?;
        Ok(StagedFile::from_temp(self.tmp))
    }
}
