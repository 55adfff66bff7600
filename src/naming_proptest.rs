//! Property-based tests for the naming helpers.
//!
//! These tests use proptest to generate random basenames and paths and check
//! that normalization and relative-path computation hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::naming::{normalize_name, relative_and_strip};
    use proptest::prelude::*;
    use std::path::PathBuf;

    const SUFFIX: &str = ".schema.omi.json";

    proptest! {
        /// Property: the normalized name never contains whitespace
        #[test]
        fn normalize_name_has_no_whitespace(words in prop::collection::vec("[a-zA-Z0-9]{1,8}", 0..5)) {
            let basename = format!("{}{}", words.join(" "), SUFFIX);
            let name = normalize_name(&basename, SUFFIX);
            prop_assert!(!name.chars().any(char::is_whitespace));
        }

        /// Property: each word keeps its tail and gets an uppercased head
        #[test]
        fn normalize_name_capitalizes_each_word(words in prop::collection::vec("[a-z][a-zA-Z0-9]{0,8}", 1..5)) {
            let basename = format!("{}{}", words.join(" "), SUFFIX);
            let expected: String = words
                .iter()
                .map(|w| format!("{}{}", w[..1].to_uppercase(), &w[1..]))
                .collect();
            prop_assert_eq!(normalize_name(&basename, SUFFIX), expected);
        }

        /// Property: normalize_name is deterministic
        #[test]
        fn normalize_name_is_deterministic(input in ".*") {
            prop_assert_eq!(normalize_name(&input, SUFFIX), normalize_name(&input, SUFFIX));
        }

        /// Property: root + version + relative + suffix rebuilds the original path
        #[test]
        fn relative_and_strip_round_trips(
            version in "v[0-9]\\.[0-9]",
            segments in prop::collection::vec("[a-zA-Z0-9_-]{1,8}", 1..4),
            stem in "[a-zA-Z0-9_-]{1,12}",
        ) {
            let root = PathBuf::from("/sources/schemas");
            let version_root = root.join(&version);
            let mut path = version_root.clone();
            for segment in &segments {
                path.push(segment);
            }
            path.push(format!("{}{}", stem, SUFFIX));

            let relative = relative_and_strip(&path, &version_root, SUFFIX).unwrap();
            prop_assert!(!relative.ends_with(SUFFIX));
            prop_assert!(!relative.starts_with('/'));
            prop_assert_eq!(version_root.join(format!("{}{}", relative, SUFFIX)), path);
        }
    }
}
