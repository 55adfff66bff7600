//! # Source Acquisition
//!
//! Refreshes the local clones of the two upstream repositories and seeds
//! per-version build directories from the static site template.
//!
//! Cloning goes through [`GitOperations`] so tests can run without network
//! access. Both operations are destructive on their own paths: an existing
//! checkout is deleted before it is cloned again, and nothing is restored if
//! the clone fails afterwards.

use crate::config::Layout;
use crate::error::Result;
use crate::filesystem::copy_tree;
use crate::git::{GitOperations, SystemGit};
use log::info;
use std::path::{Path, PathBuf};

/// Clones sources and stages the static template.
pub struct SourceAcquirer {
    git_ops: Box<dyn GitOperations>,
    /// `(url, local checkout)` pairs, schemas first.
    sources: Vec<(String, PathBuf)>,
    static_dir: PathBuf,
    target_dir: PathBuf,
}

impl SourceAcquirer {
    /// Creates an acquirer that clones with the system `git`.
    pub fn new(layout: &Layout) -> Self {
        Self::with_operations(layout, Box::new(SystemGit))
    }

    /// Creates an acquirer with a custom `GitOperations` implementation.
    pub fn with_operations(layout: &Layout, git_ops: Box<dyn GitOperations>) -> Self {
        Self {
            git_ops,
            sources: vec![
                (
                    layout.schemas_url.clone(),
                    layout.schemas_checkout.clone(),
                ),
                (
                    layout.instances_url.clone(),
                    layout.instances_checkout.clone(),
                ),
            ],
            static_dir: layout.static_dir.clone(),
            target_dir: layout.target_dir.clone(),
        }
    }

    /// Deletes each local checkout if present and replaces it with a fresh
    /// shallow clone. The first failure aborts the remaining clones.
    pub fn clone_sources(&self) -> Result<()> {
        for (url, checkout) in &self.sources {
            remove_checkout(checkout)?;
            info!("Cloning {} into {}", url, checkout.display());
            self.git_ops.clone_shallow(url, checkout)?;
        }
        Ok(())
    }

    /// Copies the static template into `target/{version}`.
    ///
    /// Fails with `DestinationExists` if that directory is already there;
    /// use [`SourceAcquirer::clean_target`] first to rebuild a version.
    pub fn copy_static_structures(&self, version: &str) -> Result<PathBuf> {
        let destination = self.target_dir.join(version);
        let copied = copy_tree(&self.static_dir, &destination, false)?;
        info!(
            "Copied {} template files into {}",
            copied,
            destination.display()
        );
        Ok(destination)
    }

    /// Removes `target/{version}`. Returns whether anything was removed.
    pub fn clean_target(&self, version: &str) -> Result<bool> {
        let destination = self.target_dir.join(version);
        if destination.exists() {
            std::fs::remove_dir_all(&destination)?;
            return Ok(true);
        }
        Ok(false)
    }
}

fn remove_checkout(checkout: &Path) -> Result<()> {
    if checkout.exists() {
        std::fs::remove_dir_all(checkout)?;
    }
    Ok(())
}
