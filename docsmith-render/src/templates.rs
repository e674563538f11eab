//! Askama template definitions.

use askama::Template;
use docsmith_core::Navigation;

/// One collapsible sidebar section.
#[derive(Debug, Clone)]
pub struct SidebarSection {
    pub name: String,

    /// Whether the section starts expanded (it contains the current page).
    pub open: bool,

    pub links: Vec<SidebarLink>,
}

#[derive(Debug, Clone)]
pub struct SidebarLink {
    pub title: String,

    /// Href relative to the current page, root prefix already applied.
    pub href: String,

    pub active: bool,
}

/// One landing-page card, linking to a section's first page.
#[derive(Debug, Clone)]
pub struct TopicCard {
    pub name: String,
    pub href: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub pages: usize,
}

/// Content page template: sidebar plus the rendered article body.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub title: String,
    pub site_title: String,

    /// Rendered markdown body. The only unescaped insertion.
    pub content: String,

    /// Relative prefix from this page back to the output root.
    pub root_prefix: String,

    pub sidebar: Vec<SidebarSection>,
}

/// Landing page template: hero plus one card per section.
#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub site_title: String,
    pub site_description: String,
    pub intro: String,
    pub has_intro: bool,
    pub root_prefix: String,
    pub cards: Vec<TopicCard>,
}

/// Build the sidebar for one page. Hrefs are prefixed so the links work
/// from the page's depth; the section containing the route starts open.
pub fn sidebar_for(nav: &Navigation, route: &str, root_prefix: &str) -> Vec<SidebarSection> {
    nav.sections
        .iter()
        .map(|section| SidebarSection {
            name: section.name.clone(),
            open: section.is_active(route),
            links: section
                .items
                .iter()
                .map(|item| SidebarLink {
                    title: item.title.clone(),
                    href: format!("{root_prefix}{}", item.href),
                    active: item.href == route,
                })
                .collect(),
        })
        .collect()
}

/// Build the landing cards, one per section, each pointing at the
/// section's first page.
pub fn cards_for(nav: &Navigation, root_prefix: &str) -> Vec<TopicCard> {
    nav.sections
        .iter()
        .map(|section| TopicCard {
            name: section.name.clone(),
            href: section
                .items
                .first()
                .map(|item| format!("{root_prefix}{}", item.href))
                .unwrap_or_else(|| format!("{root_prefix}index.html")),
            description: section.description.clone(),
            icon: section.icon.clone(),
            color: section.color.clone(),
            pages: section.items.len(),
        })
        .collect()
}
