//! `subconv config` – show where settings come from and what they resolve to.

use anyhow::Result;
use std::path::Path;
use subconv_core::config::{self, SubconvConfig};

pub fn run_config(cfg: &SubconvConfig, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}
