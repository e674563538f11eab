//! Fenced code block rendering.
//!
//! Every fenced block gets the same outer chrome (window-control dots
//! plus a label), with three bodies behind it: an annotated directory
//! listing, syntax-highlighted code with a filename breadcrumb, or plain
//! highlighted code. Highlighting failures degrade to escaped text.

use super::escape_html;
use super::filetree;
use super::highlight::Highlighter;
use pulldown_cmark::{CodeBlockKind, CowStr, Event, Tag, TagEnd};
use regex::Regex;
use std::sync::OnceLock;

const CODE_DOTS: &str =
    "<span class=\"code-dots\"><span></span><span></span><span></span></span>";

/// Renders fenced code blocks out of the event stream into finished
/// HTML, buffering each block's text between its start and end tags.
pub struct CodeBlockRenderer<'h> {
    highlighter: &'h Highlighter,
}

impl<'h> CodeBlockRenderer<'h> {
    pub fn new(highlighter: &'h Highlighter) -> Self {
        Self { highlighter }
    }

    /// Replace fenced code blocks with rendered HTML events. Indented
    /// blocks pass through unchanged.
    pub fn transform<'a>(&self, events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        let mut result = Vec::with_capacity(events.len());
        let mut in_block = false;
        let mut fenced = false;
        let mut lang: Option<String> = None;
        let mut body = String::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    in_block = true;
                    body.clear();
                    match kind {
                        CodeBlockKind::Fenced(tag) => {
                            fenced = true;
                            lang = parse_lang(&tag);
                        }
                        CodeBlockKind::Indented => {
                            fenced = false;
                            lang = None;
                        }
                    }
                }
                Event::Text(text) if in_block => {
                    body.push_str(text.as_ref());
                }
                Event::End(TagEnd::CodeBlock) if in_block => {
                    in_block = false;
                    if fenced {
                        let html = self.render(&body, lang.as_deref());
                        result.push(Event::Html(CowStr::Boxed(html.into_boxed_str())));
                    } else {
                        result.push(Event::Start(Tag::CodeBlock(CodeBlockKind::Indented)));
                        result.push(Event::Text(CowStr::Boxed(
                            body.clone().into_boxed_str(),
                        )));
                        result.push(Event::End(TagEnd::CodeBlock));
                    }
                }
                other => result.push(other),
            }
        }

        result
    }

    /// Render one fenced block body with its optional language tag.
    pub fn render(&self, text: &str, lang: Option<&str>) -> String {
        if lang.is_none() && filetree::is_file_tree(text) {
            return render_tree_block(text);
        }
        self.render_code(text, lang)
    }

    fn render_code(&self, text: &str, lang: Option<&str>) -> String {
        let annotation = split_filename_annotation(text);
        let (chrome_label, body, has_filename) = match &annotation {
            Some((path, rest)) => (breadcrumb_label(path), rest.as_str(), true),
            None => (lang_label(lang), text, false),
        };

        let body_html = match self.highlighter.highlight(body, lang.unwrap_or("text")) {
            Ok(html) => html,
            Err(err) => {
                tracing::debug!("falling back to plain rendering: {err}");
                format!(
                    "<pre class=\"code-plain\"><code>{}</code></pre>",
                    escape_html(body)
                )
            }
        };

        format!(
            "<div class=\"code-block{}\"><div class=\"code-chrome\">{CODE_DOTS}{chrome_label}</div>{body_html}</div>",
            if has_filename { " has-filename" } else { "" },
        )
    }
}

fn render_tree_block(text: &str) -> String {
    format!(
        "<div class=\"code-block file-tree\"><div class=\"code-chrome\">{CODE_DOTS}<span class=\"code-lang\">FILES</span></div><pre class=\"code-plain\"><code>{}</code></pre></div>",
        filetree::render_file_tree(text)
    )
}

/// First token of the fence info string, if any.
fn parse_lang(tag: &str) -> Option<String> {
    let first = tag.trim().split([',', ' ']).next().unwrap_or("");
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}

fn lang_label(lang: Option<&str>) -> String {
    let label = lang.unwrap_or("text").to_uppercase();
    format!("<span class=\"code-lang\">{}</span>", escape_html(&label))
}

/// A first line that is nothing but a line comment holding a path-like
/// token with an extension, e.g. `// src/store/reactive.ts`.
fn filename_annotation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?://|#)[ \t]*([\w./-]+\.\w+)[ \t]*\n").unwrap())
}

/// Split a leading filename annotation off the block body. Returns the
/// annotated path and the remaining code.
fn split_filename_annotation(text: &str) -> Option<(String, String)> {
    let caps = filename_annotation_re().captures(text)?;
    let whole = caps.get(0)?;
    let path = caps.get(1)?.as_str().to_string();
    Some((path, text[whole.end()..].to_string()))
}

/// Breadcrumb chrome label: directory segments with separator glyphs,
/// final segment styled distinctly.
fn breadcrumb_label(path: &str) -> String {
    let mut parts: Vec<&str> = path.split('/').collect();
    let file = parts.pop().unwrap_or("");

    let mut out = String::from("<span class=\"code-filepath\">");
    for dir in parts {
        out.push_str(&escape_html(dir));
        out.push_str("<span class=\"fp-sep\">/</span>");
    }
    out.push_str("<span class=\"fp-file\">");
    out.push_str(&escape_html(file));
    out.push_str("</span></span>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Highlighter {
        Highlighter::new().expect("default themes should load")
    }

    #[test]
    fn test_plain_code_gets_chrome_and_lang_label() {
        let highlighter = fixture();
        let renderer = CodeBlockRenderer::new(&highlighter);
        let html = renderer.render("fn main() {}", Some("rust"));
        assert!(html.contains("class=\"code-block\""));
        assert!(html.contains("code-dots"));
        assert!(html.contains("<span class=\"code-lang\">RUST</span>"));
        assert!(html.contains("code-light"));
        assert!(html.contains("code-dark"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_escaped_text() {
        let highlighter = fixture();
        let renderer = CodeBlockRenderer::new(&highlighter);
        let html = renderer.render("a <b> & c", Some("klingon"));
        assert!(html.contains("code-plain"));
        assert!(html.contains("a &lt;b&gt; &amp; c"));
        assert!(html.contains("<span class=\"code-lang\">KLINGON</span>"));
    }

    #[test]
    fn test_untagged_tree_block_is_not_highlighted() {
        let highlighter = fixture();
        let renderer = CodeBlockRenderer::new(&highlighter);
        let html = renderer.render("src/\n├── lib.rs", None);
        assert!(html.contains("file-tree"));
        assert!(html.contains("<span class=\"code-lang\">FILES</span>"));
        assert!(html.contains("ft-branch"));
        assert!(!html.contains("code-light"));
    }

    #[test]
    fn test_tagged_block_with_glyphs_stays_code() {
        let highlighter = fixture();
        let renderer = CodeBlockRenderer::new(&highlighter);
        let html = renderer.render("let s = \"├──\";", Some("rust"));
        assert!(!html.contains("file-tree"));
    }

    #[test]
    fn test_filename_annotation_becomes_breadcrumb() {
        let highlighter = fixture();
        let renderer = CodeBlockRenderer::new(&highlighter);
        let html = renderer.render("// src/store/reactive.js\nconst x = 1;\n", Some("js"));
        assert!(html.contains("has-filename"));
        assert!(html.contains("<span class=\"fp-sep\">/</span>"));
        assert!(html.contains("<span class=\"fp-file\">reactive.js</span>"));
        // The annotation line is stripped from the rendered body
        assert!(!html.contains("src/store/reactive.js\nconst"));
    }

    #[test]
    fn test_hash_comment_annotation() {
        let highlighter = fixture();
        let renderer = CodeBlockRenderer::new(&highlighter);
        let html = renderer.render("# scripts/deploy.sh\necho hi\n", Some("bash"));
        assert!(html.contains("<span class=\"fp-file\">deploy.sh</span>"));
    }

    #[test]
    fn test_ordinary_comment_is_not_an_annotation() {
        let highlighter = fixture();
        let renderer = CodeBlockRenderer::new(&highlighter);
        let html = renderer.render("// compute the sum\nlet x = 1;\n", Some("js"));
        assert!(!html.contains("has-filename"));
    }

    #[test]
    fn test_transform_replaces_fenced_blocks() {
        use pulldown_cmark::{html, Parser};

        let highlighter = fixture();
        let renderer = CodeBlockRenderer::new(&highlighter);
        let events: Vec<Event> = Parser::new("```rust\nfn main() {}\n```").collect();
        let events = renderer.transform(events);
        let mut out = String::new();
        html::push_html(&mut out, events.into_iter());

        assert!(out.contains("code-block"));
        assert!(!out.contains("<pre><code class=\"language-rust\">"));
    }
}
