/// Separator between key segments.
pub const SEPARATOR: char = '/';

/// Append the key separator to `prefix` unless it already ends with one.
///
/// An empty prefix normalizes to `"/"`.
#[must_use]
pub fn normalize_prefix(prefix: &str) -> String {
    if prefix.ends_with(SEPARATOR) {
        prefix.to_string()
    } else {
        format!("{prefix}{SEPARATOR}")
    }
}

/// True for keys that stand in for a directory rather than carrying content
#[must_use]
pub fn is_directory_key(key: &str) -> bool {
    key.ends_with(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_is_appended() {
        assert_eq!(normalize_prefix("data"), "data/");
        assert_eq!(normalize_prefix("a/b"), "a/b/");
    }

    #[test]
    fn test_normalized_prefix_is_unchanged() {
        for prefix in ["data/", "a/b/", "/"] {
            assert_eq!(normalize_prefix(prefix), prefix);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for prefix in ["", "x", "x/", "x//", "deep/er/path"] {
            let once = normalize_prefix(prefix);
            assert_eq!(normalize_prefix(&once), once);
        }
    }

    #[test]
    fn test_empty_prefix() {
        assert_eq!(normalize_prefix(""), "/");
    }

    #[test]
    fn test_directory_keys() {
        assert!(is_directory_key("data/"));
        assert!(!is_directory_key("data/a.txt"));
    }
}
