//! Shared test utilities for integration and E2E tests.
//!
//! [`PublishFixture`] lays out a temporary directory the way a real run
//! sees it:
//!
//! ```text
//! <tmp>/origin.git   bare repository standing in for the publish remote
//! <tmp>/upload       clone of origin.git (the publish clone)
//! <tmp>/site         working root: static/, target/, sources_*/
//! ```
//!
//! With the default configuration `site/../upload` is the publish clone.

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{git, PublishFixture};
}

/// Run git in `dir` and return stdout, panicking with stderr on failure.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn configure_identity(dir: &Path) {
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

pub struct PublishFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl PublishFixture {
    /// Create the origin, a publish clone of it and an empty site root.
    ///
    /// The origin's `main` branch holds a README and a `.nojekyll` marker.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();

        let seed = root.join("seed");
        std::fs::create_dir_all(&seed).unwrap();
        git(&seed, &["init", "-b", "main"]);
        configure_identity(&seed);
        std::fs::write(seed.join("README.md"), "publish target").unwrap();
        std::fs::write(seed.join(".nojekyll"), "").unwrap();
        git(&seed, &["add", "--all"]);
        git(&seed, &["commit", "-m", "Initial commit"]);

        git(root, &["clone", "--bare", "seed", "origin.git"]);
        git(root, &["clone", "origin.git", "upload"]);
        configure_identity(&root.join("upload"));
        std::fs::create_dir_all(root.join("site")).unwrap();

        Self { temp_dir }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The working root commands run in.
    pub fn site(&self) -> PathBuf {
        self.root().join("site")
    }

    pub fn upload(&self) -> PathBuf {
        self.root().join("upload")
    }

    pub fn origin(&self) -> PathBuf {
        self.root().join("origin.git")
    }

    /// Write a file relative to the site root.
    pub fn with_site_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child("site")
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Write `site/target/{version}/{path}` for each entry.
    pub fn with_build(self, version: &str, files: &[(&str, &str)]) -> Self {
        let mut fixture = self;
        for (path, content) in files {
            fixture = fixture.with_site_file(&format!("target/{}/{}", version, path), content);
        }
        fixture
    }

    /// Replace the build of `version` with exactly `files`.
    pub fn rebuild(&self, version: &str, files: &[(&str, &str)]) {
        let target = self.site().join("target").join(version);
        if target.exists() {
            std::fs::remove_dir_all(&target).unwrap();
        }
        for (path, content) in files {
            let file = target.join(path);
            std::fs::create_dir_all(file.parent().unwrap()).unwrap();
            std::fs::write(file, content).unwrap();
        }
    }

    /// Commit subjects on `branch` of the origin, newest first.
    pub fn origin_log(&self, branch: &str) -> Vec<String> {
        git(&self.origin(), &["log", "--format=%s", branch])
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Files tracked at the tip of `branch` in the origin.
    pub fn origin_files(&self, branch: &str) -> Vec<String> {
        git(&self.origin(), &["ls-tree", "-r", "--name-only", branch])
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn origin_has_branch(&self, branch: &str) -> bool {
        Command::new("git")
            .args(["rev-parse", "--verify", "--quiet"])
            .arg(format!("refs/heads/{}", branch))
            .current_dir(self.origin())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

impl Default for PublishFixture {
    fn default() -> Self {
        Self::new()
    }
}
