//! # Index Command Implementation
//!
//! Finds all schema (or instance) files of a version and prints each
//! normalized name with its path relative to the version directory. This is
//! the lookup table the external site builder consumes.

use anyhow::{Context, Result};
use clap::Args;

use omi_publish::config::Layout;
use omi_publish::loader::VersionedIndex;

/// Print the name to relative-path index of a version
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Version directory to index
    pub version: String,

    /// Index instances instead of schemas
    #[arg(long)]
    pub instances: bool,

    /// Print a JSON object instead of tab-separated lines
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn loader_for(instances: bool, layout: &Layout) -> VersionedIndex {
    if instances {
        VersionedIndex::instances(&layout.instances_root)
    } else {
        VersionedIndex::schemas(&layout.schemas_root)
    }
}

/// Execute the `index` command.
pub fn execute(args: IndexArgs, layout: &Layout) -> Result<()> {
    let loader = loader_for(args.instances, layout);
    let index = loader
        .load(&args.version)
        .with_context(|| format!("Failed to index version {}", args.version))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&index)?);
    } else {
        for (name, path) in &index {
            println!("{}\t{}", name, path);
        }
    }
    Ok(())
}
