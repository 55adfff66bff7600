//! Default values for omi-publish configuration.
//!
//! This module provides the fixed locations the publishing pipeline has
//! always used, so that every command and the config file agree on them.

/// Upstream repository holding the schema definitions.
pub const SCHEMAS_URL: &str = "https://github.com/openMetadataInitiative/openMINDS.git";

/// Upstream repository holding the instance records.
pub const INSTANCES_URL: &str =
    "https://github.com/openMetadataInitiative/openMINDS_instances.git";

/// Local clone of [`SCHEMAS_URL`], relative to the working root.
pub const SCHEMAS_CHECKOUT: &str = "sources_schemas";

/// Local clone of [`INSTANCES_URL`], relative to the working root.
pub const INSTANCES_CHECKOUT: &str = "sources_instances";

/// Directory inside the schema clone that holds one folder per version.
pub const SCHEMAS_SUBDIR: &str = "schemas";

/// Directory inside the instance clone that holds one folder per version.
pub const INSTANCES_SUBDIR: &str = "instances";

/// Site template copied into every build.
pub const STATIC_DIR: &str = "static";

/// Parent of the per-version build outputs.
pub const TARGET_DIR: &str = "target";

/// Pre-existing clone of the publish repository.
pub const UPLOAD_DIR: &str = "../upload";

/// Remote that publish branches are pushed to.
pub const REMOTE: &str = "origin";

/// Config file looked up in the working root when `--config` is not given.
pub const CONFIG_FILE: &str = ".omi-publish.yaml";
