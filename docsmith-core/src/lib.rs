//! # docsmith-core
//!
//! Core library for the docsmith documentation site generator.
//!
//! This crate provides configuration loading, source-to-output path
//! mapping, the sidebar navigation model, and the markdown-to-HTML
//! rendering pipeline. Writing the rendered pages to disk is the CLI's
//! job; everything here builds the in-memory site model.

pub mod builder;
pub mod config;
pub mod markdown;
pub mod nav;
pub mod paths;
pub mod slug;

pub use builder::{check_site_layout, BuildError, PageDoc, SiteBuilder, SiteModel};
pub use config::{Config, ConfigError};
pub use markdown::highlight::{HighlightError, Highlighter};
pub use markdown::MarkdownRenderer;
pub use nav::{NavItem, NavMismatch, NavSection, Navigation};
pub use paths::{asset_prefix, html_output_path};
pub use slug::slugify;
