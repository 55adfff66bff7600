//! # CLI Command Implementations
//!
//! One module per `omi-publish` subcommand. Each module contains:
//! - An `Args` struct with the command-specific arguments, derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and the resolved
//!   `Layout` and calls into the `omi_publish` library.

pub mod clone;
pub mod index;
pub mod stage;
pub mod upload;
pub mod versions;
