//! # Stage Command Implementation
//!
//! Seeds `target/<VERSION>` with the static site template. The target must
//! not exist yet unless `--clean` is given, in which case it is removed
//! first.

use anyhow::{Context, Result};
use clap::Args;

use omi_publish::acquire::SourceAcquirer;
use omi_publish::config::Layout;

/// Copy the static template into the build directory of a version
#[derive(Args, Debug)]
pub struct StageArgs {
    /// Version to stage
    pub version: String,

    /// Remove an existing target/<VERSION> before copying
    #[arg(long)]
    pub clean: bool,
}

/// Execute the `stage` command.
pub fn execute(args: StageArgs, layout: &Layout) -> Result<()> {
    let acquirer = SourceAcquirer::new(layout);
    if args.clean && acquirer.clean_target(&args.version)? {
        log::info!("Removed previous build of {}", args.version);
    }
    let destination = acquirer
        .copy_static_structures(&args.version)
        .with_context(|| format!("Failed to stage version {}", args.version))?;
    println!("Staged {}", destination.display());
    Ok(())
}
