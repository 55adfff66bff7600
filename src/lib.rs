//! # omi-publish Library
//!
//! This library publishes versioned openMINDS documentation builds. It pulls
//! schema and instance definitions from their upstream repositories, indexes
//! the files of each version, seeds per-version build directories from a
//! static template and pushes finished builds to a per-version branch of a
//! publishing repository.
//!
//! ## Quick Example
//!
//! ```no_run
//! use omi_publish::config::Config;
//! use omi_publish::loader::VersionedIndex;
//! use std::path::Path;
//!
//! let layout = Config::default().layout(Path::new("/work/site"));
//! let schemas = VersionedIndex::schemas(&layout.schemas_root);
//! for version in schemas.list_versions().unwrap() {
//!     let index = schemas.load(&version).unwrap();
//!     println!("{}: {} schemas", version, index.len());
//! }
//! ```
//!
//! ## Execution Flow
//!
//! 1.  **Acquire** (`acquire`): re-clone both upstream repositories and copy
//!     the static template into `target/{version}`.
//! 2.  **Index** (`loader`, `naming`): list versions and map every schema or
//!     instance file to its normalized name and relative path. The site
//!     builder that consumes these indexes lives outside this crate.
//! 3.  **Publish** (`publish`): replace the publish clone's tree with
//!     `target/{version}` and commit and push it only if something changed.
//!
//! All locations come from [`config::Layout`], resolved against an explicit
//! root directory.

pub mod acquire;
pub mod config;
pub mod defaults;
pub mod error;
pub mod filesystem;
pub mod git;
pub mod loader;
pub mod naming;
pub mod publish;

#[cfg(test)]
mod naming_proptest;
