//! # Clone Command Implementation
//!
//! Deletes the local schema and instance checkouts and replaces them with
//! fresh shallow clones of their upstream repositories.

use anyhow::{Context, Result};
use clap::Args;

use omi_publish::acquire::SourceAcquirer;
use omi_publish::config::Layout;

/// Re-clone the source repositories
#[derive(Args, Debug)]
pub struct CloneArgs {}

/// Execute the `clone` command.
pub fn execute(_args: CloneArgs, layout: &Layout) -> Result<()> {
    SourceAcquirer::new(layout)
        .clone_sources()
        .context("Failed to clone source repositories")?;
    println!(
        "Cloned sources into {} and {}",
        layout.schemas_checkout.display(),
        layout.instances_checkout.display()
    );
    Ok(())
}
