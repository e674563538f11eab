//! Internal link rewriting from source paths to output paths.

use pulldown_cmark::{CowStr, Event, Tag};

/// Rewrite markdown-extension hrefs on link start tags to their output
/// equivalents. Everything else passes through untouched.
pub fn rewrite_links<'a>(events: Vec<Event<'a>>) -> Vec<Event<'a>> {
    events
        .into_iter()
        .map(|event| match event {
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => {
                let dest = rewrite_href(&dest_url);
                Event::Start(Tag::Link {
                    link_type,
                    dest_url: CowStr::Boxed(dest.into_boxed_str()),
                    title,
                    id,
                })
            }
            other => other,
        })
        .collect()
}

/// `.md` hrefs become `.html`, with a trailing `README.html` aliased to
/// `index.html`. The alias is checked again after the swap so links
/// written directly against `README.html` output paths resolve too.
pub fn rewrite_href(href: &str) -> String {
    let mut out = href.to_string();

    if let Some(stem) = out.strip_suffix(".md") {
        out = format!("{stem}.html");
        if let Some(dir) = out.strip_suffix("README.html") {
            out = format!("{dir}index.html");
        }
    }

    if out.ends_with("/README.html") {
        if let Some(dir) = out.strip_suffix("README.html") {
            out = format!("{dir}index.html");
        }
    }

    out
}
