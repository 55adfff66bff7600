//! # Upload Command Implementation
//!
//! Publishes one or more built versions through the publish clone. Versions
//! are processed in the order given and the first failure stops the run.

use anyhow::{Context, Result};
use clap::Args;

use omi_publish::config::Layout;
use omi_publish::publish::{GitPusher, UploadOutcome};

/// Commit and push built versions
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Versions to publish; each must have been built into target/<VERSION>
    #[arg(required = true)]
    pub versions: Vec<String>,
}

/// Execute the `upload` command.
pub fn execute(args: UploadArgs, layout: &Layout) -> Result<()> {
    let pusher = GitPusher::from_layout(layout).with_context(|| {
        format!(
            "Failed to open publish clone at {}",
            layout.upload_dir.display()
        )
    })?;

    for version in &args.versions {
        let outcome = pusher
            .upload(version)
            .with_context(|| format!("Failed to upload version {}", version))?;
        match outcome {
            UploadOutcome::Pushed { changes } => {
                println!("{}: pushed {} changes to {}", version, changes, layout.remote)
            }
            UploadOutcome::NoChanges => println!("{}: no changes", version),
        }
    }
    Ok(())
}
