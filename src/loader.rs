//! # Versioned File Indexes
//!
//! Schemas and instances are laid out the same way in their source
//! checkouts: one directory per version, with the definition files nested
//! arbitrarily deep below it.
//!
//! ```text
//! sources_schemas/schemas/{version}/**/*.schema.omi.json
//! sources_instances/instances/{version}/**/*.jsonld
//! ```
//!
//! [`VersionedIndex`] covers both trees. It is parameterized by the source
//! root and the file suffix, and offers three operations: listing versions,
//! finding the files of a version, and indexing those files by normalized
//! name.
//!
//! Neither versions nor files are sorted. The index is keyed by name, so
//! two files normalizing to the same name keep only the one that was
//! processed last.

use crate::error::{Error, Result};
use crate::naming::{normalize_name, relative_and_strip};
use glob::{MatchOptions, Pattern};
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File suffix of schema definitions.
pub const SCHEMA_SUFFIX: &str = ".schema.omi.json";

/// File suffix of instance records.
pub const INSTANCE_SUFFIX: &str = ".jsonld";

/// Normalized name to version-relative path (suffix stripped).
pub type FileIndex = BTreeMap<String, String>;

/// A directory of versioned definition files sharing one suffix.
#[derive(Debug, Clone)]
pub struct VersionedIndex {
    source_root: PathBuf,
    suffix: String,
}

impl VersionedIndex {
    /// Creates an index over `source_root` for files ending in `suffix`.
    pub fn new(source_root: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            source_root: source_root.into(),
            suffix: suffix.into(),
        }
    }

    /// Index over `*.schema.omi.json` files.
    pub fn schemas(source_root: impl Into<PathBuf>) -> Self {
        Self::new(source_root, SCHEMA_SUFFIX)
    }

    /// Index over `*.jsonld` files.
    pub fn instances(source_root: impl Into<PathBuf>) -> Self {
        Self::new(source_root, INSTANCE_SUFFIX)
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Directory holding the files of `version`.
    pub fn version_root(&self, version: &str) -> PathBuf {
        self.source_root.join(version)
    }

    /// Lists the immediate subdirectories of the source root.
    ///
    /// Entries come back in the order the filesystem enumerates them. A
    /// missing source root is an I/O error.
    pub fn list_versions(&self) -> Result<Vec<String>> {
        let mut versions = Vec::new();
        for entry in fs::read_dir(&self.source_root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                versions.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(versions)
    }

    /// Finds every file under the version directory ending in the suffix.
    ///
    /// A version directory that does not exist yields an empty list.
    pub fn find_files(&self, version: &str) -> Result<Vec<PathBuf>> {
        let base = Pattern::escape(&self.version_root(version).to_string_lossy());
        let pattern = format!("{}/**/*{}", base, Pattern::escape(&self.suffix));
        debug!("Searching {}", pattern);

        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };

        let mut files = Vec::new();
        for entry in glob::glob_with(&pattern, options)? {
            let path = entry.map_err(|e| Error::Io(e.into_error()))?;
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }

    /// Maps each file's normalized name to its path relative to the version
    /// directory, suffix stripped.
    ///
    /// Later files overwrite earlier ones with the same name.
    pub fn index(&self, files: &[PathBuf], version: &str) -> Result<FileIndex> {
        let version_root = self.version_root(version);
        let mut index = FileIndex::new();
        for file in files {
            let basename = file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let name = normalize_name(&basename, &self.suffix);
            let relative = relative_and_strip(file, &version_root, &self.suffix)?;
            if let Some(previous) = index.insert(name.clone(), relative) {
                debug!("{} overrides earlier entry {} for {}", name, previous, version);
            }
        }
        Ok(index)
    }

    /// Finds and indexes the files of `version` in one go.
    pub fn load(&self, version: &str) -> Result<FileIndex> {
        let files = self.find_files(version)?;
        self.index(&files, version)
    }
}
