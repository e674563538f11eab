//! Heading anchor id generation.

/// Derive an anchor id from heading text.
///
/// Rules:
/// - Lowercase
/// - Strip embedded markup tags
/// - Drop characters that are not alphanumeric, whitespace, or hyphens
/// - Collapse whitespace/hyphen runs to a single hyphen
/// - Trim leading/trailing hyphens
///
/// Ids are not made unique across a document; duplicate headings yield
/// duplicate ids.
///
/// # Examples
///
/// ```
/// use docsmith_core::slugify;
///
/// assert_eq!(slugify("Hello World!"), "hello-world");
/// assert_eq!(slugify("Core/Adapter Split"), "coreadapter-split");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = strip_tags(&lowered);

    let mut out = String::with_capacity(stripped.len());
    let mut pending_hyphen = false;
    for c in stripped.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        }
        // Anything else is dropped without breaking the current word
    }
    out
}

/// Remove `<...>` tag sequences from heading text.
fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Test Organization"), "test-organization");
    }

    #[test]
    fn test_punctuation_stripped() {
        assert_eq!(slugify("Hello World!"), "hello-world");
        assert_eq!(slugify("What's new?"), "whats-new");
        assert_eq!(slugify("E2E & Integration"), "e2e-integration");
    }

    #[test]
    fn test_hyphen_runs_collapse() {
        assert_eq!(slugify("a - b"), "a-b");
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("already-hyphenated words"), "already-hyphenated-words");
    }

    #[test]
    fn test_edge_hyphens_trimmed() {
        assert_eq!(slugify("  padded  "), "padded");
        assert_eq!(slugify("- leading"), "leading");
        assert_eq!(slugify("trailing -"), "trailing");
    }

    #[test]
    fn test_markup_tags_stripped() {
        assert_eq!(slugify("Hello <em>World</em>"), "hello-world");
        assert_eq!(slugify("<code>inject()</code> pattern"), "inject-pattern");
    }

    #[test]
    fn test_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("<br>"), "");
    }
}
