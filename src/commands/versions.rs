//! # Versions Command Implementation
//!
//! Prints the version directories found in the schema checkout, or in the
//! instance checkout with `--instances`, one per line in filesystem order.

use anyhow::{Context, Result};
use clap::Args;

use omi_publish::config::Layout;

/// List available versions
#[derive(Args, Debug)]
pub struct VersionsArgs {
    /// List instance versions instead of schema versions
    #[arg(long)]
    pub instances: bool,
}

/// Execute the `versions` command.
pub fn execute(args: VersionsArgs, layout: &Layout) -> Result<()> {
    let loader = super::index::loader_for(args.instances, layout);
    let versions = loader
        .list_versions()
        .with_context(|| format!("Failed to list versions in {}", loader.source_root().display()))?;
    for version in versions {
        println!("{}", version);
    }
    Ok(())
}
