//! Input validation for identifiers and file paths taken from request URLs.
//!
//! Both checks are pure and must run before the first upstream call; a
//! failure short-circuits the request.

/// Upper bound on identifier length, to bound worst-case URL construction.
pub const MAX_IDENTIFIER_LEN: usize = 256;

/// True when `name` is a safe owner or repository identifier: non-empty,
/// at most [`MAX_IDENTIFIER_LEN`] bytes, every byte in `[A-Za-z0-9._-]`.
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_IDENTIFIER_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
}

/// True when a requested file path is safe to interpolate into a raw URL.
/// The `..` check is substring-based, not segment-based: `a..b` is rejected
/// along with `a/../b`.
pub fn is_safe_path(path: &str) -> bool {
    !path.contains("..") && !path.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_identifier_character_class() {
        for name in ["acme", "acme-corp", "widget_2", "a.b", "A9", "-", "_", "."] {
            assert!(is_valid_identifier(name), "should accept {name:?}");
        }
    }

    #[test]
    fn rejects_unsafe_identifiers() {
        for name in ["", "a/b", "a b", "a%2f", "café", "a\0b", "a?b", "a#b"] {
            assert!(!is_valid_identifier(name), "should reject {name:?}");
        }
    }

    #[test]
    fn rejects_oversized_identifier() {
        assert!(is_valid_identifier(&"a".repeat(MAX_IDENTIFIER_LEN)));
        assert!(!is_valid_identifier(&"a".repeat(MAX_IDENTIFIER_LEN + 1)));
    }

    #[test]
    fn accepts_nested_paths() {
        for path in ["README.md", "docs/guide.md", "a/b/c.md", "a.b/c.md"] {
            assert!(is_safe_path(path), "should accept {path:?}");
        }
    }

    #[test]
    fn rejects_traversal_and_absolute_paths() {
        for path in ["../secret", "a/../b", "a..b", "..", "/a", "/", "docs/.."] {
            assert!(!is_safe_path(path), "should reject {path:?}");
        }
    }
}
