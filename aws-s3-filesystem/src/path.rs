/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Maps logical paths to physical storage keys by prepending a configured
/// prefix.
///
/// A non-empty prefix is normalized to end with exactly one `/`. Leading
/// slashes on logical paths are stripped so a key never contains an empty
/// leading segment.
#[derive(Clone, Debug, Default)]
pub struct PathPrefixer {
    prefix: String,
}

impl PathPrefixer {
    /// Create a prefixer from a raw prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        let raw = prefix.into();
        let trimmed = raw.trim_end_matches('/');
        let prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("{trimmed}/")
        };
        Self { prefix }
    }

    /// The normalized prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Prefix a logical path, yielding the physical storage key.
    pub fn prefix_path(&self, path: &str) -> String {
        format!("{}{}", self.prefix, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::PathPrefixer;

    #[test]
    fn empty_prefix_leaves_paths_untouched() {
        let prefixer = PathPrefixer::new("");
        assert_eq!(prefixer.prefix(), "");
        assert_eq!(prefixer.prefix_path("file.txt"), "file.txt");
    }

    #[test]
    fn prefix_is_normalized_with_single_trailing_slash() {
        assert_eq!(PathPrefixer::new("pre").prefix(), "pre/");
        assert_eq!(PathPrefixer::new("pre/").prefix(), "pre/");
        assert_eq!(PathPrefixer::new("nested/dir//").prefix(), "nested/dir/");
    }

    #[test]
    fn logical_paths_are_joined_onto_the_prefix() {
        let prefixer = PathPrefixer::new("pre/");
        assert_eq!(prefixer.prefix_path("file.txt"), "pre/file.txt");
        assert_eq!(prefixer.prefix_path("/file.txt"), "pre/file.txt");
        assert_eq!(prefixer.prefix_path("a/b/file.txt"), "pre/a/b/file.txt");
    }
}
