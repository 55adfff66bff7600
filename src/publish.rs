//! # Publishing
//!
//! [`GitPusher`] moves a finished build into the publish clone and pushes
//! it to a branch named after the version. The clone must already exist;
//! this module never creates it.
//!
//! `upload` runs a fixed sequence with no retries:
//!
//! 1.  **Checkout**: fetch, then switch to the version branch, creating it
//!     from the current HEAD when neither a local nor a remote branch exists.
//! 2.  **Clear**: remove every top-level entry of the clone except dot-entries.
//! 3.  **Stage**: copy `target/{version}` over the cleared tree.
//! 4.  **Diff**: `git add --all` and compare the index with HEAD. Changes are
//!     committed and pushed; an empty diff ends the run without a commit.
//!
//! A failure at any step is returned as is and leaves the clone in whatever
//! state that step reached.

use crate::config::Layout;
use crate::error::Result;
use crate::filesystem::{clear_directory, copy_tree};
use crate::git::{self, Checkout};
use log::info;
use std::path::PathBuf;

/// What `upload` did with a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// A commit was created and pushed; `changes` entries differed from HEAD.
    Pushed { changes: usize },
    /// The staged tree matched HEAD; nothing was committed or pushed.
    NoChanges,
}

/// Commit message used for every published version.
pub fn commit_message(version: &str) -> String {
    format!("Updating documentation for version {}", version)
}

/// Publishes build outputs through an existing clone of the target repository.
#[derive(Debug)]
pub struct GitPusher {
    upload_dir: PathBuf,
    target_dir: PathBuf,
    remote: String,
}

impl GitPusher {
    /// Opens the publish clone at `upload_dir`.
    ///
    /// Fails unless `upload_dir` is the root of a git work tree.
    pub fn open(
        upload_dir: impl Into<PathBuf>,
        target_dir: impl Into<PathBuf>,
        remote: impl Into<String>,
    ) -> Result<Self> {
        let upload_dir = upload_dir.into();
        git::ensure_work_tree(&upload_dir)?;
        Ok(Self {
            upload_dir,
            target_dir: target_dir.into(),
            remote: remote.into(),
        })
    }

    /// Opens the publish clone described by `layout`.
    pub fn from_layout(layout: &Layout) -> Result<Self> {
        Self::open(&layout.upload_dir, &layout.target_dir, &layout.remote)
    }

    /// Publishes `target/{version}` to the `version` branch.
    pub fn upload(&self, version: &str) -> Result<UploadOutcome> {
        info!("Uploading version {}", version);
        self.checkout(version)?;
        clear_directory(&self.upload_dir)?;
        copy_tree(&self.target_dir.join(version), &self.upload_dir, true)?;

        git::add_all(&self.upload_dir)?;
        let changes = git::staged_changes(&self.upload_dir)?;
        if changes.is_empty() {
            info!("No changes - nothing to commit");
            return Ok(UploadOutcome::NoChanges);
        }

        info!(
            "{} changes found - pushing to {}",
            changes.len(),
            self.remote
        );
        git::commit(&self.upload_dir, &commit_message(version))?;
        git::push(&self.upload_dir, &self.remote, version)?;
        Ok(UploadOutcome::Pushed {
            changes: changes.len(),
        })
    }

    fn checkout(&self, version: &str) -> Result<()> {
        git::fetch(&self.upload_dir, &self.remote)?;
        match git::checkout_existing(&self.upload_dir, version, &self.remote)? {
            Checkout::Found => Ok(()),
            Checkout::NotFound => {
                info!("Branch {} does not exist yet - creating it", version);
                git::create_branch(&self.upload_dir, version)
            }
        }
    }
}
