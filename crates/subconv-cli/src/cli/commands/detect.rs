//! `subconv detect <file>` – dry inspection of the decode chain for one file.

use anyhow::{Context, Result};
use std::path::Path;
use subconv_core::config::SubconvConfig;
use subconv_core::encoding::DecodeChain;

pub fn run_detect(cfg: &SubconvConfig, file: &Path) -> Result<()> {
    let chain = DecodeChain::from_config(&cfg.encoding)?;
    let raw = std::fs::read(file).with_context(|| format!("read {}", file.display()))?;
    let inspection = chain.inspect(&raw);

    let candidates = inspection
        .candidates
        .iter()
        .map(|e| e.name())
        .collect::<Vec<_>>()
        .join(", ");

    println!("file:       {}", file.display());
    println!(
        "guess:      {}",
        inspection.guess.map(|e| e.name()).unwrap_or("none")
    );
    println!("candidates: {}", candidates);
    match &inspection.decoded {
        Some(d) if d.via_cleanup => {
            println!("decodes as: {} (after stripping null bytes)", d.encoding_name())
        }
        Some(d) => println!("decodes as: {}", d.encoding_name()),
        None => println!("decodes as: nothing (file would be skipped)"),
    }
    Ok(())
}
