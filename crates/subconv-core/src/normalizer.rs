//! The per-file pipeline: filter → read → decode → backup → write.

use std::fs;
use std::path::Path;

use crate::config::SubconvConfig;
use crate::encoding::{DecodeChain, EncodingDetector};
use crate::error::{ConfigError, NormalizeError};
use crate::filter::FileFilter;
use crate::outcome::{FileOutcome, RunSummary, SkipReason};
use crate::scanner::Scanner;
use crate::storage;

/// Run-level switches that are not part of the persisted config.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Detect and report only; no backup, no write.
    pub dry_run: bool,
    /// Stop the run at the first file that fails with an I/O error.
    pub fail_fast: bool,
}

pub struct Normalizer {
    config: SubconvConfig,
    filter: FileFilter,
    chain: DecodeChain,
    options: RunOptions,
}

impl Normalizer {
    pub fn new(config: SubconvConfig, options: RunOptions) -> Result<Self, ConfigError> {
        config.validate()?;
        let chain = DecodeChain::from_config(&config.encoding)?;
        Ok(Self::assemble(config, chain, options))
    }

    /// Same as `new`, with an explicit detector regardless of `use_detector`.
    pub fn with_detector(
        config: SubconvConfig,
        options: RunOptions,
        detector: Box<dyn EncodingDetector>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let chain = DecodeChain::with_detector(&config.encoding, detector)?;
        Ok(Self::assemble(config, chain, options))
    }

    fn assemble(config: SubconvConfig, chain: DecodeChain, options: RunOptions) -> Self {
        Self {
            filter: FileFilter::new(&config.filter),
            config,
            chain,
            options,
        }
    }

    /// Walk `root` and process every matching file, calling `on_outcome` as each completes.
    ///
    /// Only a bad root (or a failure under `fail_fast`) ends the run early.
    pub fn run<F>(&self, root: &Path, mut on_outcome: F) -> Result<RunSummary, NormalizeError>
    where
        F: FnMut(&FileOutcome),
    {
        let scanner = Scanner::new(root, self.config.scan.follow_symlinks)?;
        tracing::info!(root = %scanner.root().display(), dry_run = self.options.dry_run, "scan started");

        let mut summary = RunSummary::default();
        for entry in scanner.files() {
            let outcome = match entry {
                Ok(path) => {
                    summary.scanned += 1;
                    if !self.filter.matches(&path) {
                        continue;
                    }
                    summary.matched += 1;
                    self.process_file(&path)
                }
                Err(e) => Err(e),
            };
            let outcome = match outcome {
                Ok(o) => o,
                Err(e) if self.options.fail_fast => {
                    tracing::error!(path = %e.path().display(), "{}", e);
                    return Err(e);
                }
                Err(e) => {
                    tracing::warn!(path = %e.path().display(), "{}", e);
                    FileOutcome::Failed {
                        path: e.path().to_path_buf(),
                        error: e.to_string(),
                    }
                }
            };
            summary.record(&outcome);
            on_outcome(&outcome);
        }

        tracing::info!(%summary, "scan finished");
        Ok(summary)
    }

    /// Convert one file in place. The caller decides whether the file matches the filter.
    ///
    /// An undecodable file is `Ok(Skipped)` and nothing is written. A backup
    /// failure returns before the original is opened for writing. A symlinked
    /// `path` keeps its link: the backup sits next to the link and the new
    /// bytes replace the file it resolves to.
    pub fn process_file(&self, path: &Path) -> Result<FileOutcome, NormalizeError> {
        let read_err = |source| NormalizeError::Read {
            path: path.to_path_buf(),
            source,
        };
        let raw = fs::read(path).map_err(read_err)?;
        let meta = fs::metadata(path).map_err(read_err)?;

        let Some(decoded) = self.chain.decode(&raw) else {
            tracing::warn!(path = %path.display(), "undecodable, skipping");
            return Ok(FileOutcome::Skipped {
                path: path.to_path_buf(),
                reason: SkipReason::Undecodable,
            });
        };

        if self.options.dry_run {
            return Ok(FileOutcome::WouldConvert {
                path: path.to_path_buf(),
                encoding: decoded.encoding_name(),
                via_cleanup: decoded.via_cleanup,
            });
        }

        let target = fs::canonicalize(path).map_err(read_err)?;
        let backup = storage::create_backup(path, &raw, &meta, &self.config.backup)?;
        drop(raw);

        storage::write_atomic(&target, decoded.text.as_bytes(), Some(&meta), false).map_err(
            |source| NormalizeError::Write {
                path: path.to_path_buf(),
                source,
            },
        )?;

        tracing::info!(
            path = %path.display(),
            encoding = decoded.encoding_name(),
            backup = %backup.path.display(),
            "converted"
        );
        Ok(FileOutcome::Converted {
            path: path.to_path_buf(),
            encoding: decoded.encoding_name(),
            backup_path: backup.path,
            via_cleanup: decoded.via_cleanup,
            backup_reused: backup.reused,
        })
    }
}
