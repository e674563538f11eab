//! Source-to-output path mapping.

/// Map a docs-relative markdown path to its output-relative HTML path.
///
/// The extension swaps from `.md` to `.html`, and a base name of
/// `README` aliases to `index` so every directory gets a default page.
///
/// # Examples
///
/// ```
/// use docsmith_core::html_output_path;
///
/// assert_eq!(html_output_path("guide.md"), "guide.html");
/// assert_eq!(html_output_path("sub/README.md"), "sub/index.html");
/// ```
pub fn html_output_path(md_rel_path: &str) -> String {
    let (dir, file) = match md_rel_path.rsplit_once('/') {
        Some((dir, file)) => (Some(dir), file),
        None => (None, md_rel_path),
    };
    let stem = file.strip_suffix(".md").unwrap_or(file);
    let html_name = if stem == "README" {
        "index.html".to_string()
    } else {
        format!("{stem}.html")
    };
    match dir {
        Some(dir) => format!("{dir}/{html_name}"),
        None => html_name,
    }
}

/// Relative prefix from a page back to the site root.
///
/// Routes are output-relative, so the depth is the number of directory
/// segments: zero segments gives `./`, N segments give N levels of
/// parent traversal. Every root-relative asset and navigation link is
/// resolved through this prefix, which keeps the output tree
/// relocatable.
pub fn asset_prefix(route: &str) -> String {
    let depth = route.matches('/').count();
    if depth == 0 {
        "./".to_string()
    } else {
        "../".repeat(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_swap() {
        assert_eq!(html_output_path("overview.md"), "overview.html");
        assert_eq!(html_output_path("vue/overview.md"), "vue/overview.html");
        assert_eq!(html_output_path("a/b/c.md"), "a/b/c.html");
    }

    #[test]
    fn test_readme_aliases_to_index() {
        assert_eq!(html_output_path("README.md"), "index.html");
        assert_eq!(html_output_path("sub/README.md"), "sub/index.html");
        assert_eq!(html_output_path("a/b/README.md"), "a/b/index.html");
    }

    #[test]
    fn test_readme_substring_is_not_aliased() {
        // Only an exact README base name is special
        assert_eq!(html_output_path("README-old.md"), "README-old.html");
        assert_eq!(html_output_path("sub/NOT-README.md"), "sub/NOT-README.html");
    }

    #[test]
    fn test_asset_prefix_depth() {
        assert_eq!(asset_prefix("index.html"), "./");
        assert_eq!(asset_prefix("vue/overview.html"), "../");
        assert_eq!(asset_prefix("a/b/c.html"), "../../");
    }
}
