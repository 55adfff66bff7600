//! Integration tests for `GitPusher` against real local git repositories.
//!
//! The publish remote is a bare repository in a temp dir, so pushes are
//! observable without network access.

mod common;

use common::prelude::*;
use omi_publish::config::Config;
use omi_publish::publish::{GitPusher, UploadOutcome};

fn pusher(fixture: &PublishFixture) -> GitPusher {
    let layout = Config::default().layout(&fixture.site());
    GitPusher::from_layout(&layout).unwrap()
}

#[test]
fn test_upload_creates_missing_branch_and_pushes() {
    let fixture = PublishFixture::new().with_build(
        "v2.3",
        &[("index.html", "<html/>"), ("schemas/person.html", "person")],
    );
    assert!(!fixture.origin_has_branch("v2.3"));

    let outcome = pusher(&fixture).upload("v2.3").unwrap();

    // README.md deleted, two pages added
    assert_eq!(outcome, UploadOutcome::Pushed { changes: 3 });
    assert!(fixture.origin_has_branch("v2.3"));
    assert_eq!(
        fixture.origin_log("v2.3"),
        vec!["Updating documentation for version v2.3", "Initial commit"]
    );
    assert_eq!(
        git(&fixture.upload(), &["rev-parse", "--abbrev-ref", "HEAD"]).trim(),
        "v2.3"
    );

    let mut files = fixture.origin_files("v2.3");
    files.sort();
    assert_eq!(files, vec![".nojekyll", "index.html", "schemas/person.html"]);

    // main is untouched
    assert_eq!(fixture.origin_log("main"), vec!["Initial commit"]);
}

#[test]
fn test_upload_identical_tree_is_a_no_op() {
    let fixture = PublishFixture::new().with_build("v2.3", &[("index.html", "<html/>")]);
    let pusher = pusher(&fixture);

    pusher.upload("v2.3").unwrap();
    let outcome = pusher.upload("v2.3").unwrap();

    assert_eq!(outcome, UploadOutcome::NoChanges);
    assert_eq!(fixture.origin_log("v2.3").len(), 2);
}

#[test]
fn test_upload_changed_tree_adds_exactly_one_commit() {
    let fixture = PublishFixture::new().with_build(
        "v2.3",
        &[("index.html", "<html/>"), ("old.html", "gone soon")],
    );
    let pusher = pusher(&fixture);
    pusher.upload("v2.3").unwrap();

    fixture.rebuild("v2.3", &[("index.html", "<html>v2</html>")]);
    let outcome = pusher.upload("v2.3").unwrap();

    assert_eq!(outcome, UploadOutcome::Pushed { changes: 2 });
    let log = fixture.origin_log("v2.3");
    assert_eq!(log.len(), 3);
    assert_eq!(log[0], "Updating documentation for version v2.3");

    let mut files = fixture.origin_files("v2.3");
    files.sort();
    assert_eq!(files, vec![".nojekyll", "index.html"]);
}

#[test]
fn test_upload_checks_out_remote_only_branch() {
    let fixture = PublishFixture::new().with_build("v1.0", &[("index.html", "first")]);
    pusher(&fixture).upload("v1.0").unwrap();

    // A fresh publish clone only knows the branch as origin/v1.0
    std::fs::remove_dir_all(fixture.upload()).unwrap();
    git(fixture.root(), &["clone", "origin.git", "upload"]);
    git(&fixture.upload(), &["config", "user.email", "test@example.com"]);
    git(&fixture.upload(), &["config", "user.name", "Test User"]);
    git(&fixture.upload(), &["config", "commit.gpgsign", "false"]);

    fixture.rebuild("v1.0", &[("index.html", "second")]);
    let outcome = pusher(&fixture).upload("v1.0").unwrap();

    assert_eq!(outcome, UploadOutcome::Pushed { changes: 1 });
    // Built on top of the existing remote branch, not on main
    assert_eq!(
        fixture.origin_log("v1.0"),
        vec![
            "Updating documentation for version v1.0",
            "Updating documentation for version v1.0",
            "Initial commit"
        ]
    );
}

#[test]
fn test_upload_keeps_versions_on_separate_branches() {
    let fixture = PublishFixture::new()
        .with_build("v1.0", &[("v1.html", "one")])
        .with_build("v2.0", &[("v2.html", "two")]);
    let pusher = pusher(&fixture);

    pusher.upload("v1.0").unwrap();
    pusher.upload("v2.0").unwrap();

    assert!(fixture.origin_files("v1.0").contains(&"v1.html".to_string()));
    assert!(!fixture.origin_files("v2.0").contains(&"v1.html".to_string()));
    assert!(fixture.origin_files("v2.0").contains(&"v2.html".to_string()));
}

#[test]
fn test_upload_missing_build_fails() {
    let fixture = PublishFixture::new();
    let result = pusher(&fixture).upload("v9.9");
    assert!(result.is_err());
    assert!(!fixture.origin_has_branch("v9.9"));
}
