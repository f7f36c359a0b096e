//! Detect the text encoding of subtitle files and rewrite them as UTF-8,
//! keeping a verified backup of the original bytes.

pub mod config;
pub mod logging;

pub mod checksum;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod normalizer;
pub mod outcome;
pub mod scanner;
pub mod storage;

pub use config::SubconvConfig;
pub use error::{ConfigError, NormalizeError};
pub use normalizer::{Normalizer, RunOptions};
pub use outcome::{FileOutcome, RunSummary};
