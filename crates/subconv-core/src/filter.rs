//! Name/extension filter deciding which scanned files are candidates.
//!
//! Purely name based: "docs.txt" matches the default "cs" marker and
//! "ceske.srt" does not. That heuristic is kept as is.

use std::path::Path;

use crate::config::FilterConfig;

#[derive(Debug, Clone)]
pub struct FileFilter {
    marker: String,
    case_insensitive: bool,
    extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(cfg: &FilterConfig) -> Self {
        let marker = if cfg.case_insensitive_name {
            cfg.name_marker.to_lowercase()
        } else {
            cfg.name_marker.clone()
        };
        Self {
            marker,
            case_insensitive: cfg.case_insensitive_name,
            extensions: cfg.extensions.clone(),
        }
    }

    /// True when the file name contains the marker and ends with an allowed extension.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.name_matches(name) && self.extension_matches(name)
    }

    fn name_matches(&self, name: &str) -> bool {
        if self.case_insensitive {
            name.to_lowercase().contains(&self.marker)
        } else {
            name.contains(&self.marker)
        }
    }

    fn extension_matches(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::new(&FilterConfig::default())
    }
}
