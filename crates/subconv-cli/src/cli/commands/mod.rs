//! CLI command handlers. Each command is in its own file.

mod config;
mod convert;
mod detect;

pub use config::run_config;
pub use convert::{run_convert, ConvertFlags};
pub use detect::run_detect;
