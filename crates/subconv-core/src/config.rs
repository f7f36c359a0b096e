use anyhow::{Context, Result};
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Which files are picked up during the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Substring that must appear in the file name.
    pub name_marker: String,
    /// Compare the marker against the lowercased file name.
    pub case_insensitive_name: bool,
    /// Allowed trailing extensions, including the dot (matched case-sensitively).
    pub extensions: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            name_marker: "cs".to_string(),
            case_insensitive_name: true,
            extensions: vec![".srt".into(), ".sub".into(), ".txt".into()],
        }
    }
}

/// Encoding fallback chain settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    /// Encoding labels tried in order (WHATWG labels, e.g. "utf-8", "cp1252").
    pub candidates: Vec<String>,
    /// Run the statistical detector and give its guess top priority.
    pub use_detector: bool,
    /// Strip null bytes and retry UTF-8 when every candidate fails.
    pub strip_nulls_fallback: bool,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            candidates: vec![
                "utf-8".into(),
                "windows-1250".into(),
                "iso-8859-2".into(),
                "cp1252".into(),
            ],
            use_detector: true,
            strip_nulls_fallback: true,
        }
    }
}

impl EncodingConfig {
    /// Resolve the configured labels to encodings, keeping order and dropping duplicates.
    pub fn resolve_candidates(&self) -> Result<Vec<&'static Encoding>, ConfigError> {
        if self.candidates.is_empty() {
            return Err(ConfigError::NoCandidates);
        }
        let mut out: Vec<&'static Encoding> = Vec::with_capacity(self.candidates.len());
        for label in &self.candidates {
            let enc = Encoding::for_label(label.trim().as_bytes())
                .ok_or_else(|| ConfigError::UnknownEncoding(label.clone()))?;
            if !out.contains(&enc) {
                out.push(enc);
            }
        }
        Ok(out)
    }
}

/// What to do when `<file><suffix>` already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupPolicy {
    /// Replace the existing backup with the current bytes.
    #[default]
    Overwrite,
    /// Leave the existing backup alone so the oldest original survives repeated runs.
    Keep,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    /// Appended to the original path to form the backup path.
    pub suffix: String,
    pub policy: BackupPolicy,
    /// Read the backup back and compare its SHA-256 before touching the original.
    pub verify: bool,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            suffix: ".bkp".to_string(),
            policy: BackupPolicy::Overwrite,
            verify: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Follow symbolic links while walking (loops are reported per entry).
    pub follow_symlinks: bool,
}

/// Global configuration loaded from `~/.config/subconv/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubconvConfig {
    pub filter: FilterConfig,
    pub encoding: EncodingConfig,
    pub backup: BackupConfig,
    pub scan: ScanConfig,
}

impl SubconvConfig {
    /// Reject settings the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.filter.extensions.is_empty() {
            return Err(ConfigError::NoExtensions);
        }
        if self.backup.suffix.is_empty() {
            return Err(ConfigError::EmptyBackupSuffix);
        }
        self.encoding.resolve_candidates()?;
        Ok(())
    }

    /// Render as the TOML that `load_from_path` reads back.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("subconv")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SubconvConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SubconvConfig::default();
        let toml = default_cfg.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file. Missing sections fall back to defaults.
pub fn load_from_path(path: &Path) -> Result<SubconvConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SubconvConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
