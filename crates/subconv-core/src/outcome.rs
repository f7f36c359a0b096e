//! Per-file results and run totals returned by the normalizer.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Why a matched file was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No candidate encoding and no cleanup decode succeeded.
    Undecodable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Undecodable => write!(f, "no candidate encoding could decode it"),
        }
    }
}

/// Result of processing one file that passed the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    Converted {
        path: PathBuf,
        encoding: &'static str,
        backup_path: PathBuf,
        via_cleanup: bool,
        /// The backup already existed and was kept.
        backup_reused: bool,
    },
    /// Dry run: what `Converted` would have reported.
    WouldConvert {
        path: PathBuf,
        encoding: &'static str,
        via_cleanup: bool,
    },
    Skipped {
        path: PathBuf,
        reason: SkipReason,
    },
    Failed {
        path: PathBuf,
        error: String,
    },
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Converted {
                path,
                encoding,
                backup_path,
                via_cleanup,
                backup_reused,
            } => {
                write!(f, "converted {} from {}", path.display(), encoding)?;
                if *via_cleanup {
                    write!(f, " (after stripping null bytes)")?;
                }
                if *backup_reused {
                    write!(f, "; kept existing backup {}", backup_path.display())
                } else {
                    write!(f, "; backup {}", backup_path.display())
                }
            }
            FileOutcome::WouldConvert {
                path,
                encoding,
                via_cleanup,
            } => {
                write!(f, "would convert {} from {}", path.display(), encoding)?;
                if *via_cleanup {
                    write!(f, " (after stripping null bytes)")?;
                }
                Ok(())
            }
            FileOutcome::Skipped { path, reason } => {
                write!(f, "skipped {}: {}", path.display(), reason)
            }
            FileOutcome::Failed { path, error } => write!(f, "failed {}: {}", path.display(), error),
        }
    }
}

/// Totals for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Regular files seen by the scanner.
    pub scanned: u64,
    /// Files that passed the name/extension filter.
    pub matched: u64,
    pub converted: u64,
    pub would_convert: u64,
    pub skipped: u64,
    /// Files (or walk entries) that hit an I/O error.
    pub failed: u64,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Converted { .. } => self.converted += 1,
            FileOutcome::WouldConvert { .. } => self.would_convert += 1,
            FileOutcome::Skipped { .. } => self.skipped += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} scanned, {} matched, {} converted, {} skipped, {} failed",
            self.scanned, self.matched, self.converted, self.skipped, self.failed
        )?;
        if self.would_convert > 0 {
            write!(f, ", {} would convert", self.would_convert)?;
        }
        Ok(())
    }
}
