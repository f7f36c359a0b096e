//! Recursive directory walk yielding regular files below a root.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::NormalizeError;

/// Lazily walks `root` and yields every regular file beneath it, including
/// symlinks that resolve to one. Directory symlinks are only descended into
/// when `follow_symlinks` is set.
///
/// Entries are sorted by file name inside each directory so runs are
/// reproducible. Errors on individual entries are yielded rather than ending
/// the walk; the caller decides whether they are fatal.
pub struct Scanner {
    root: PathBuf,
    follow_symlinks: bool,
}

impl Scanner {
    /// Build a scanner after checking that `root` exists and is a directory.
    pub fn new(root: &Path, follow_symlinks: bool) -> Result<Self, NormalizeError> {
        validate_root(root)?;
        Ok(Self {
            root: root.to_path_buf(),
            follow_symlinks,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = Result<PathBuf, NormalizeError>> {
        let root = self.root.clone();
        WalkDir::new(&self.root)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(e) if e.file_type().is_file() => Some(Ok(e.into_path())),
                // Unfollowed link: keep it when it points at a regular file.
                Ok(e) if e.path_is_symlink() && e.path().is_file() => Some(Ok(e.into_path())),
                Ok(_) => None,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                    Some(Err(NormalizeError::Walk { path, source: err }))
                }
            })
    }
}

/// Fail with `Traversal` if `root` is missing or is not a directory.
pub fn validate_root(root: &Path) -> Result<(), NormalizeError> {
    let meta = std::fs::metadata(root).map_err(|e| NormalizeError::Traversal {
        root: root.to_path_buf(),
        reason: e.to_string(),
    })?;
    if !meta.is_dir() {
        return Err(NormalizeError::Traversal {
            root: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn walks_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("top.srt"), "x").unwrap();
        fs::write(nested.join("deep.cs.srt"), "y").unwrap();

        let scanner = Scanner::new(dir.path(), false).unwrap();
        let files: Vec<_> = scanner.files().map(|r| r.unwrap()).collect();
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("a/b/c/deep.cs.srt")));
        assert!(files.iter().any(|p| p.ends_with("top.srt")));
    }

    #[test]
    fn skips_directories_themselves() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("movie.cs.srt")).unwrap();
        let scanner = Scanner::new(dir.path(), false).unwrap();
        assert_eq!(scanner.files().count(), 0);
    }

    #[test]
    fn missing_root_is_traversal_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = Scanner::new(&missing, false).err().unwrap();
        assert!(matches!(err, NormalizeError::Traversal { .. }));
    }

    #[test]
    fn file_root_is_traversal_error() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let err = validate_root(f.path()).unwrap_err();
        match err {
            NormalizeError::Traversal { reason, .. } => assert_eq!(reason, "not a directory"),
            other => panic!("expected Traversal, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn file_symlink_is_listed_without_following() {
        use std::os::unix::fs::symlink;
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("store");
        let lib = dir.path().join("lib");
        fs::create_dir_all(store.join("sub")).unwrap();
        fs::create_dir_all(&lib).unwrap();
        fs::write(store.join("real.txt"), "x").unwrap();
        fs::write(store.join("sub").join("inner.cs.srt"), "y").unwrap();
        symlink(store.join("real.txt"), lib.join("film.cs.srt")).unwrap();
        symlink(store.join("sub"), lib.join("linked")).unwrap();
        symlink(store.join("missing.txt"), lib.join("dangling.cs.srt")).unwrap();

        let files: Vec<_> = Scanner::new(&lib, false)
            .unwrap()
            .files()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(files, vec![lib.join("film.cs.srt")]);

        let followed: Vec<_> = Scanner::new(&lib, true)
            .unwrap()
            .files()
            .filter_map(Result::ok)
            .collect();
        assert!(followed.contains(&lib.join("film.cs.srt")));
        assert!(followed.contains(&lib.join("linked").join("inner.cs.srt")));
    }

    #[test]
    fn order_is_sorted_within_directory() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let scanner = Scanner::new(dir.path(), false).unwrap();
        let names: Vec<String> = scanner
            .files()
            .map(|r| r.unwrap().file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }
}
