use anyhow::{Result, anyhow};
use clap::Parser;
use log::debug;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_MODULE;

#[derive(Debug, Clone, Parser)]
#[command(name = "unused-imports")]
#[command(about = "Find unused named imports from a module in a JS/TS source tree")]
pub struct Config {
    /// Root directory to scan
    pub root: PathBuf,

    /// Module specifier whose named imports are audited
    #[arg(long, default_value = DEFAULT_MODULE)]
    pub module: String,

    /// Emit the report as JSON instead of the human-readable listing
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn validate_root(root: &Path) -> Result<()> {
    debug!("Validating root directory: {}", root.display());
    if !root.exists() {
        return Err(anyhow!("Root directory does not exist: {}", root.display()));
    }
    if !root.is_dir() {
        return Err(anyhow!("Root path is not a directory: {}", root.display()));
    }
    Ok(())
}
