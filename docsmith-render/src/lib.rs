//! # docsmith-render
//!
//! Template rendering library for docsmith.
//!
//! This crate wraps rendered page bodies in the site chrome using
//! Askama templates. All template fields are escaped on output; the
//! markdown body is the only `|safe` insertion, and it is produced by
//! the rendering pipeline in docsmith-core, never by user config.

pub mod templates;

pub use templates::{
    cards_for, sidebar_for, LandingTemplate, PageTemplate, SidebarLink, SidebarSection, TopicCard,
};
