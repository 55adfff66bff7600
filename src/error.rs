//! # Error Handling
//!
//! This module defines the centralized error type for `omi-publish`. It uses
//! the `thiserror` library to build a single `Error` enum covering every
//! failure the library can report, each variant carrying enough context to
//! tell the user which repository, path or command was involved.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum for all failures. Failures are grouped as:
//!   - Configuration parsing errors.
//!   - Git clone and git command failures (network or source-control).
//!   - Filesystem errors: paths outside their root, copy destinations that
//!     already exist, and wrapped I/O errors.
//!   - Glob pattern errors.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! A missing publish branch is deliberately not represented here: checkout
//! reports it as `git::Checkout::NotFound`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for omi-publish operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing the `.omi-publish.yaml` configuration file.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An error occurred while cloning a source repository.
    #[error("Git clone error for {url}: {message}")]
    GitClone { url: String, message: String },

    /// A git command exited unsuccessfully or could not be started.
    #[error("Git command failed in {repo}: {command} - {stderr}")]
    GitCommand {
        command: String,
        repo: String,
        stderr: String,
    },

    /// A path that was expected to live under a root directory does not.
    #[error("Path {} is not under {}", path.display(), root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    /// A copy refused to write into a destination that already exists.
    #[error("Destination already exists: {}", path.display())]
    DestinationExists { path: PathBuf },

    /// A filesystem operation failed for a reason not covered by `Io`.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
