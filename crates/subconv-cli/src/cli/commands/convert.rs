//! `subconv convert <root>` – run the normalizer over a directory tree.

use anyhow::Result;
use std::path::Path;
use subconv_core::config::SubconvConfig;
use subconv_core::{FileOutcome, Normalizer, RunOptions, RunSummary};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertFlags {
    pub dry_run: bool,
    pub json: bool,
    pub fail_fast: bool,
}

pub fn run_convert(cfg: SubconvConfig, root: &Path, flags: ConvertFlags) -> Result<()> {
    let options = RunOptions {
        dry_run: flags.dry_run,
        fail_fast: flags.fail_fast,
    };
    let normalizer = Normalizer::new(cfg, options)?;

    let summary = normalizer.run(root, |outcome| report(outcome, flags.json))?;
    report_summary(&summary, flags.json);

    if summary.has_failures() {
        anyhow::bail!("{} file(s) could not be converted", summary.failed);
    }
    Ok(())
}

fn report(outcome: &FileOutcome, json: bool) {
    if json {
        match serde_json::to_string(outcome) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::warn!("could not serialize outcome: {}", e),
        }
    } else {
        println!("{outcome}");
    }
}

fn report_summary(summary: &RunSummary, json: bool) {
    if json {
        println!("{}", serde_json::json!({ "summary": summary }));
    } else if summary.matched == 0 {
        println!("No matching subtitle files.");
    } else {
        println!("{summary}");
    }
}
