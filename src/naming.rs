//! Name and path normalization for schema and instance files

use crate::error::{Error, Result};
use std::path::Path;

/// Turn a file basename into a type-style identifier.
///
/// The `suffix` is stripped from the end of `basename`, the remainder is
/// split on whitespace and every word gets its first character uppercased
/// before the words are concatenated. The rest of each word is left as is,
/// so `"person type.schema.omi.json"` becomes `"PersonType"` and
/// `"contentType"` becomes `"ContentType"`.
pub fn normalize_name(basename: &str, suffix: &str) -> String {
    let stem = basename.strip_suffix(suffix).unwrap_or(basename);
    stem.split_whitespace().map(capitalize_first).collect()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Express `path` relative to `root` and strip a trailing `suffix`.
///
/// Returns [`Error::OutsideRoot`] when `path` does not live under `root`.
pub fn relative_and_strip(path: &Path, root: &Path, suffix: &str) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| Error::OutsideRoot {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    })?;
    let relative = relative.to_string_lossy();
    Ok(relative
        .strip_suffix(suffix)
        .unwrap_or(relative.as_ref())
        .to_string())
}
