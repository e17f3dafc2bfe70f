//! Path normalization and name derivation for test sources.

/// Normalizes a path to forward slashes for marker and suffix matching.
///
/// The skip tables store test-relative paths with forward slashes; Windows
/// callers may hand us backslashes. No canonicalization happens here: the
/// skip decision must work on the path string alone, even when the file does
/// not exist.
pub fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

/// Derives the Java class name from a file path: the file stem between the
/// last path separator and the last extension dot.
///
/// Dots inside directory names are ignored; only the final component is
/// inspected. A component without a dot is returned whole.
pub fn class_name(path: &str) -> &str {
    let stem = match path.rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    };
    match stem.rfind('.') {
        Some(dot) => &stem[..dot],
        None => stem,
    }
}

/// Returns the canonical suffix of `path` starting at the first occurrence of
/// `root`, if the marker is present at all.
pub fn canonical_suffix<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    path.find(root).map(|idx| &path[idx..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_backslashes() {
        assert_eq!(normalize(r"jdk\test\Foo.java"), "jdk/test/Foo.java");
        assert_eq!(normalize("jdk/test/Foo.java"), "jdk/test/Foo.java");
    }

    #[test]
    fn test_class_name_plain() {
        assert_eq!(class_name("/repo/jdk/test/Foo.java"), "Foo");
        assert_eq!(class_name("Foo.java"), "Foo");
    }

    #[test]
    fn test_class_name_dotted_directory() {
        // The dot in `v1.2` must not truncate the class name.
        assert_eq!(class_name("bundles/v1.2/Foo.java"), "Foo");
    }

    #[test]
    fn test_class_name_no_extension() {
        assert_eq!(class_name("dir/Foo"), "Foo");
    }

    #[test]
    fn test_canonical_suffix() {
        assert_eq!(
            canonical_suffix("/home/ci/repo/jdk/test/Foo.java", "jdk/test"),
            Some("jdk/test/Foo.java")
        );
        assert_eq!(canonical_suffix("/home/ci/other/Foo.java", "jdk/test"), None);
    }

    #[test]
    fn test_canonical_suffix_first_occurrence() {
        assert_eq!(
            canonical_suffix("/a/jdk/test/x/jdk/test/Foo.java", "jdk/test"),
            Some("jdk/test/x/jdk/test/Foo.java")
        );
    }
}
