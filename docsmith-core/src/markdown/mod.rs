//! Markdown-to-HTML rendering pipeline.
//!
//! Documents are parsed into a pulldown-cmark event stream, then passed
//! through a short chain of transformers: heading-id attachment, internal
//! link rewriting, and fenced-code-block rendering. Each transformer
//! degrades gracefully; nothing in this module aborts a build.

pub mod codeblock;
pub mod filetree;
pub mod highlight;
pub mod links;

use crate::slug::slugify;
use codeblock::CodeBlockRenderer;
use highlight::Highlighter;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use std::sync::OnceLock;

/// Converts one document body into an HTML fragment (no page shell).
///
/// Holds a reference to the highlighting engine so tests can thread a
/// locally constructed instance through instead of ambient state.
pub struct MarkdownRenderer<'h> {
    options: Options,
    code: CodeBlockRenderer<'h>,
}

impl<'h> MarkdownRenderer<'h> {
    pub fn new(highlighter: &'h Highlighter) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        Self {
            options,
            code: CodeBlockRenderer::new(highlighter),
        }
    }

    /// Convert markdown to an HTML fragment.
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let events: Vec<Event> = parser.collect();

        let heading_ids = collect_heading_ids(&events);
        let events = attach_heading_ids(events, &heading_ids);
        let events = links::rewrite_links(events);
        let events = self.code.transform(events);

        let mut out = String::new();
        html::push_html(&mut out, events.into_iter());
        out
    }
}

/// First level-1 heading of the source, if any.
///
/// Used for page titles; callers fall back to the file stem.
pub fn extract_title(markdown: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?m)^#\s+(.+)$").unwrap());
    re.captures(markdown)
        .map(|caps| caps[1].trim().to_string())
}

/// Slugified text of every heading, in document order.
fn collect_heading_ids(events: &[Event]) -> Vec<String> {
    let mut ids = Vec::new();
    let mut current: Option<String> = None;

    for event in events {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                current = Some(String::new());
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(ref mut title) = current {
                    title.push_str(text.as_ref());
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(title) = current.take() {
                    ids.push(slugify(&title));
                }
            }
            _ => {}
        }
    }

    ids
}

/// Attach the collected ids to heading start tags so the HTML writer
/// emits them as anchor targets. Duplicate ids are left as-is.
fn attach_heading_ids<'a>(events: Vec<Event<'a>>, ids: &[String]) -> Vec<Event<'a>> {
    let mut id_iter = ids.iter();

    events
        .into_iter()
        .map(|event| match event {
            Event::Start(Tag::Heading {
                level,
                mut id,
                classes,
                attrs,
            }) => {
                if id.is_none() {
                    if let Some(next) = id_iter.next() {
                        id = Some(CowStr::Boxed(next.clone().into_boxed_str()));
                    }
                }
                Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                })
            }
            other => other,
        })
        .collect()
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer_fixture() -> Highlighter {
        Highlighter::new().expect("default themes should load")
    }

    #[test]
    fn test_basic_markdown() {
        let highlighter = renderer_fixture();
        let renderer = MarkdownRenderer::new(&highlighter);
        let html = renderer.render("# Hello World\n\nThis is a **test**.");
        assert!(html.contains("<h1"));
        assert!(html.contains("Hello World"));
        assert!(html.contains("<strong>test</strong>"));
    }

    #[test]
    fn test_heading_anchor_ids() {
        let highlighter = renderer_fixture();
        let renderer = MarkdownRenderer::new(&highlighter);
        let html = renderer.render("## Hello World!");
        assert!(html.contains("<h2 id=\"hello-world\">"));
    }

    #[test]
    fn test_duplicate_headings_keep_duplicate_ids() {
        let highlighter = renderer_fixture();
        let renderer = MarkdownRenderer::new(&highlighter);
        let html = renderer.render("## Setup\n\ntext\n\n## Setup\n");
        assert_eq!(html.matches("id=\"setup\"").count(), 2);
    }

    #[test]
    fn test_heading_with_inline_code() {
        let highlighter = renderer_fixture();
        let renderer = MarkdownRenderer::new(&highlighter);
        let html = renderer.render("### The `inject` Pattern");
        assert!(html.contains("id=\"the-inject-pattern\""));
    }

    #[test]
    fn test_tables() {
        let highlighter = renderer_fixture();
        let renderer = MarkdownRenderer::new(&highlighter);
        let md = "\n| Header 1 | Header 2 |\n|----------|----------|\n| Cell 1   | Cell 2   |\n";
        let html = renderer.render(md);
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>Header 1</th>"));
    }

    #[test]
    fn test_extract_title() {
        assert_eq!(
            extract_title("# Page Title\n\nbody"),
            Some("Page Title".to_string())
        );
        // First H1 wins, not the first heading
        assert_eq!(
            extract_title("## Section\n\n# Real Title\n"),
            Some("Real Title".to_string())
        );
        assert_eq!(extract_title("no headings here"), None);
    }
}
