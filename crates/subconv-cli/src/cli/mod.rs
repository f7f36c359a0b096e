//! CLI for subconv, the subtitle encoding normalizer.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use subconv_core::config::{self, BackupPolicy, SubconvConfig};

use commands::{run_config, run_convert, run_detect, ConvertFlags};

/// Top-level CLI for subconv.
#[derive(Debug, Parser)]
#[command(name = "subconv")]
#[command(about = "subconv: re-encode subtitle files to UTF-8, keeping a backup", long_about = None)]
pub struct Cli {
    /// Read settings from this TOML file instead of ~/.config/subconv/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert every matching subtitle under ROOT to UTF-8.
    Convert {
        /// Directory to scan recursively.
        root: PathBuf,
        /// Detect and report only; write nothing.
        #[arg(long)]
        dry_run: bool,
        /// Print one JSON object per file and a final summary object.
        #[arg(long)]
        json: bool,
        /// Abort the run at the first file that cannot be read, backed up or written.
        #[arg(long)]
        fail_fast: bool,
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Show which encoding a single file would be decoded with, without changing it.
    Detect {
        /// File to inspect.
        file: PathBuf,
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Print the config file location and the effective settings.
    Config,
}

/// Command-line overrides applied on top of the loaded config.
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Substring the file name must contain (case-insensitive), e.g. "cs".
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,
    /// Allowed extension including the dot; repeat to allow several.
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,
    /// Candidate encoding label, tried in the order given; repeat for more.
    #[arg(long = "encoding", value_name = "LABEL")]
    pub encodings: Vec<String>,
    /// Skip the statistical detector and use only the candidate list.
    #[arg(long)]
    pub no_detect: bool,
    /// What to do with an existing backup file.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub backup_policy: Option<BackupPolicyArg>,
    /// Follow symbolic links while scanning.
    #[arg(long)]
    pub follow_symlinks: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackupPolicyArg {
    /// Replace an existing backup.
    Overwrite,
    /// Keep an existing backup untouched.
    Keep,
}

impl From<BackupPolicyArg> for BackupPolicy {
    fn from(arg: BackupPolicyArg) -> Self {
        match arg {
            BackupPolicyArg::Overwrite => BackupPolicy::Overwrite,
            BackupPolicyArg::Keep => BackupPolicy::Keep,
        }
    }
}

impl Overrides {
    pub fn apply(&self, cfg: &mut SubconvConfig) {
        if let Some(marker) = &self.marker {
            cfg.filter.name_marker = marker.clone();
        }
        if !self.extensions.is_empty() {
            cfg.filter.extensions = self.extensions.clone();
        }
        if !self.encodings.is_empty() {
            cfg.encoding.candidates = self.encodings.clone();
        }
        if self.no_detect {
            cfg.encoding.use_detector = false;
        }
        if let Some(policy) = self.backup_policy {
            cfg.backup.policy = policy.into();
        }
        if self.follow_symlinks {
            cfg.scan.follow_symlinks = true;
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Convert {
                root,
                dry_run,
                json,
                fail_fast,
                overrides,
            } => {
                overrides.apply(&mut cfg);
                let flags = ConvertFlags {
                    dry_run,
                    json,
                    fail_fast,
                };
                run_convert(cfg, &root, flags)?;
            }
            CliCommand::Detect { file, overrides } => {
                overrides.apply(&mut cfg);
                run_detect(&cfg, &file)?;
            }
            CliCommand::Config => run_config(&cfg, cli.config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
