//! Thin wrappers around the system `git` command.
//!
//! Using the system binary means clones and pushes pick up whatever
//! authentication is configured for the user:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Personal access tokens
//! - Any authentication configured in ~/.gitconfig

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use crate::error::{Error, Result};
use log::debug;

/// Result of trying to switch to a branch that may not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkout {
    /// The branch existed locally or on the remote and is now checked out.
    Found,
    /// Neither a local branch nor a remote-tracking branch has that name.
    NotFound,
}

/// Trait for cloning source repositories - allows mocking in tests
pub trait GitOperations {
    /// Replace `target_dir` with a depth-1 clone of `url`.
    fn clone_shallow(&self, url: &str, target_dir: &Path) -> Result<()>;
}

/// `GitOperations` backed by the system `git` command.
pub struct SystemGit;

impl GitOperations for SystemGit {
    fn clone_shallow(&self, url: &str, target_dir: &Path) -> Result<()> {
        clone_shallow(url, target_dir)
    }
}

/// Clone the default branch of a repository with `--depth=1`.
///
/// An existing `target_dir` is removed first, since git refuses to clone
/// into a non-empty directory.
pub fn clone_shallow(url: &str, target_dir: &Path) -> Result<()> {
    if target_dir.exists() {
        fs::remove_dir_all(target_dir)?;
    }

    if let Some(parent) = target_dir.parent() {
        fs::create_dir_all(parent)?;
    }

    debug!("git clone --depth=1 {} {}", url, target_dir.display());
    let output = Command::new("git")
        .args(["clone", "--depth=1", url])
        .arg(target_dir)
        .output()
        .map_err(|e| Error::GitClone {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);

        let message = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
        {
            format!(
                "Authentication failed. Make sure you have access to the repository.\n\
                Error: {}",
                stderr
            )
        } else {
            stderr.to_string()
        };

        return Err(Error::GitClone {
            url: url.to_string(),
            message,
        });
    }

    Ok(())
}

fn output_in(repo: &Path, args: &[&str]) -> Result<Output> {
    debug!("git {} (in {})", args.join(" "), repo.display());
    Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .map_err(|e| command_error(repo, args, e.to_string()))
}

fn command_error(repo: &Path, args: &[&str], stderr: String) -> Error {
    Error::GitCommand {
        command: args.join(" "),
        repo: repo.display().to_string(),
        stderr,
    }
}

/// Run a git command inside `repo` and return its stdout.
pub fn run(repo: &Path, args: &[&str]) -> Result<String> {
    let output = output_in(repo, args)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(command_error(repo, args, stderr));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Check that `repo` is the root of a git work tree.
///
/// A plain directory nested inside some other repository is rejected.
pub fn ensure_work_tree(repo: &Path) -> Result<()> {
    let args = ["rev-parse", "--show-toplevel"];
    if !repo.is_dir() {
        return Err(command_error(
            repo,
            &args,
            "directory does not exist".to_string(),
        ));
    }
    let stdout = run(repo, &args)?;
    let toplevel = fs::canonicalize(stdout.trim())?;
    if toplevel != fs::canonicalize(repo)? {
        return Err(command_error(
            repo,
            &args,
            format!("not the root of a work tree (enclosing root is {})", toplevel.display()),
        ));
    }
    Ok(())
}

/// Whether `reference` resolves to a commit in `repo`.
///
/// A missing reference is `Ok(false)`; anything else git complains about
/// (not a repository, corrupt refs) is an error.
pub fn ref_exists(repo: &Path, reference: &str) -> Result<bool> {
    let spec = format!("{}^{{commit}}", reference);
    let args = ["rev-parse", "--verify", "--quiet", spec.as_str()];
    let output = output_in(repo, &args)?;
    match output.status.code() {
        Some(0) => Ok(true),
        Some(1) => Ok(false),
        _ => Err(command_error(
            repo,
            &args,
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        )),
    }
}

/// Fetch refs from `remote`.
pub fn fetch(repo: &Path, remote: &str) -> Result<()> {
    run(repo, &["fetch", remote]).map(|_| ())
}

/// Check out `branch` if it exists locally or as `{remote}/{branch}`.
///
/// A remote-only branch gets a local tracking branch created by git.
pub fn checkout_existing(repo: &Path, branch: &str, remote: &str) -> Result<Checkout> {
    let local = format!("refs/heads/{}", branch);
    let tracking = format!("refs/remotes/{}/{}", remote, branch);
    if !ref_exists(repo, &local)? && !ref_exists(repo, &tracking)? {
        return Ok(Checkout::NotFound);
    }
    run(repo, &["checkout", branch, "--"])?;
    Ok(Checkout::Found)
}

/// Create `branch` from the current HEAD and switch to it.
pub fn create_branch(repo: &Path, branch: &str) -> Result<()> {
    run(repo, &["checkout", "-b", branch]).map(|_| ())
}

/// Stage every change in the work tree, deletions included.
pub fn add_all(repo: &Path) -> Result<()> {
    run(repo, &["add", "--all"]).map(|_| ())
}

/// Entries that differ between the index and HEAD, one `name-status` line each.
pub fn staged_changes(repo: &Path) -> Result<Vec<String>> {
    let stdout = run(repo, &["diff", "--cached", "--name-status", "HEAD"])?;
    Ok(stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Commit the index with `message`.
pub fn commit(repo: &Path, message: &str) -> Result<()> {
    run(repo, &["commit", "-m", message]).map(|_| ())
}

/// Push `branch` to `remote`.
pub fn push(repo: &Path, remote: &str, branch: &str) -> Result<()> {
    run(repo, &["push", remote, branch]).map(|_| ())
}
