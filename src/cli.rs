//! CLI argument parsing and command dispatch

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use omi_publish::config::{self, Layout};

use crate::commands;

/// omi-publish - Build inputs and publishing for versioned openMINDS documentation
#[derive(Parser, Debug)]
#[command(name = "omi-publish")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Working root that all configured paths are relative to.
    ///
    /// Defaults to the current directory.
    #[arg(long, global = true, value_name = "DIR", env = "OMI_PUBLISH_ROOT")]
    root: Option<PathBuf>,

    /// Configuration file (defaults to .omi-publish.yaml in the root, if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Re-clone the schema and instance source repositories
    Clone(commands::clone::CloneArgs),

    /// List the versions available in the source checkouts
    Versions(commands::versions::VersionsArgs),

    /// Print the name to path index of one version
    Index(commands::index::IndexArgs),

    /// Copy the static site template into target/<VERSION>
    Stage(commands::stage::StageArgs),

    /// Commit and push target/<VERSION> to the VERSION branch of the publish clone
    Upload(commands::upload::UploadArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let layout = self.layout()?;
        match self.command {
            Commands::Clone(args) => commands::clone::execute(args, &layout),
            Commands::Versions(args) => commands::versions::execute(args, &layout),
            Commands::Index(args) => commands::index::execute(args, &layout),
            Commands::Stage(args) => commands::stage::execute(args, &layout),
            Commands::Upload(args) => commands::upload::execute(args, &layout),
        }
    }

    fn layout(&self) -> Result<Layout> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to read current directory")?,
        };
        let config = config::load(&root, self.config.as_deref())
            .with_context(|| format!("Failed to load configuration for {}", root.display()))?;
        Ok(config.layout(&root))
    }
}

/// Route `log` output through env_logger. `RUST_LOG` wins over `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // Ignore the error if a logger was already installed
    let _ = env_logger::Builder::from_env(env)
        .format_target(false)
        .format_timestamp(None)
        .try_init();
}
