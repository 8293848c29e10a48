//! Text normalization for clipboard snapshots.
//!
//! Every insert path trims whitespace and rejects empty text, so stored
//! entries are never empty or all-whitespace.

/// Normalize raw clipboard text.
///
/// Returns the trimmed text, or `None` when nothing remains after trimming.
pub fn normalize(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize("  hello \n"), Some("hello"));
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   \t\n  "), None);
    }

    #[test]
    fn test_normalize_keeps_interior_whitespace() {
        assert_eq!(normalize(" a b\nc "), Some("a b\nc"));
    }
}
