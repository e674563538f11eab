//! Rendering for fenced blocks that are directory diagrams, not code.

use super::escape_html;

const TREE_GLYPHS: &[char] = &['│', '├', '└', '─', '┬', '┤', '┼'];

/// Whether an untagged fenced block should be treated as a file tree:
/// it contains tree-connector glyphs, or some line is a lone
/// directory-style token.
pub fn is_file_tree(text: &str) -> bool {
    if text.contains("├──") || text.contains("└──") {
        return true;
    }

    text.lines().any(|line| {
        let token = line.trim();
        token.len() > 1
            && token.ends_with('/')
            && token[..token.len() - 1]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    })
}

/// Render the block body with per-token span classes: tree glyphs,
/// directories, filenames, comments, and ellipsis placeholders.
pub fn render_file_tree(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut first = true;
    for line in text.lines() {
        if !first {
            out.push('\n');
        }
        first = false;
        render_line(line, &mut out);
    }
    out
}

fn render_line(line: &str, out: &mut String) {
    // A trailing "# comment" is styled as one unit
    let (main, comment) = match line.find('#') {
        Some(idx) => (&line[..idx], Some(&line[idx..])),
        None => (line, None),
    };

    let mut rest = main;
    while !rest.is_empty() {
        let glyph_len = run_len(rest, |c| TREE_GLYPHS.contains(&c));
        if glyph_len > 0 {
            out.push_str("<span class=\"ft-branch\">");
            out.push_str(&rest[..glyph_len]);
            out.push_str("</span>");
            rest = &rest[glyph_len..];
            continue;
        }

        let ws_len = run_len(rest, |c| c.is_whitespace());
        if ws_len > 0 {
            out.push_str(&rest[..ws_len]);
            rest = &rest[ws_len..];
            continue;
        }

        let token_len = rest
            .find(|c: char| c.is_whitespace() || TREE_GLYPHS.contains(&c))
            .unwrap_or(rest.len());
        let token = &rest[..token_len];

        // "... 12 more" style placeholders run to the end of the line
        if token.starts_with("...") {
            out.push_str("<span class=\"ft-comment\">");
            out.push_str(&escape_html(rest));
            out.push_str("</span>");
            return_comment(comment, out);
            return;
        }

        render_token(token, out);
        rest = &rest[token_len..];
    }

    return_comment(comment, out);
}

fn return_comment(comment: Option<&str>, out: &mut String) {
    if let Some(comment) = comment {
        out.push_str("<span class=\"ft-comment\">");
        out.push_str(&escape_html(comment));
        out.push_str("</span>");
    }
}

/// Classify one whitespace-delimited token. Directory segments keep
/// their trailing slash; a dot-bearing final segment counts as a file
/// only when it isn't preceded by a slash, so "src/lib.rs" marks "src/"
/// as the directory and leaves "lib.rs" plain.
fn render_token(token: &str, out: &mut String) {
    let mut remaining = token;
    while let Some(slash) = remaining.find('/') {
        let segment = &remaining[..=slash];
        out.push_str("<span class=\"ft-dir\">");
        out.push_str(&escape_html(segment));
        out.push_str("</span>");
        remaining = &remaining[slash + 1..];
    }

    if remaining.is_empty() {
        return;
    }

    let preceded_by_slash = remaining.len() < token.len();
    if !preceded_by_slash {
        if let Some(ext) = file_extension(remaining) {
            out.push_str(&format!(
                "<span class=\"ft-file ft-ext-{}\">{}</span>",
                ext,
                escape_html(remaining)
            ));
            return;
        }
    }

    out.push_str(&escape_html(remaining));
}

fn file_extension(token: &str) -> Option<&str> {
    let (stem, ext) = token.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}

fn run_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|(_, c)| !pred(*c))
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}
