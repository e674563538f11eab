//! Site model construction.
//!
//! Walks the docs tree, validates it against the declared navigation,
//! and renders every markdown file into an in-memory [`SiteModel`].
//! Writing the model to disk is the CLI's job.

use crate::config::Config;
use crate::markdown::{extract_title, MarkdownRenderer};
use crate::markdown::highlight::Highlighter;
use crate::nav::{NavMismatch, Navigation};
use crate::paths::html_output_path;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// The landing page source at the docs root. It gets special rendering
/// and is exempt from navigation validation.
const LANDING_SOURCE: &str = "README.md";

/// Directories never scanned for markdown.
const EXCLUDED_DIRS: &[&str] = &[".git", "node_modules", "target"];

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("docs directory not found: {0}")]
    MissingDocsDir(PathBuf),

    #[error("navigation does not match docs tree: {0}")]
    NavMismatch(NavMismatch),
}

/// One rendered page, ready to be wrapped in a template.
#[derive(Debug, Clone)]
pub struct PageDoc {
    /// Output path relative to the output root, e.g. `guide/index.html`.
    pub route: String,

    pub title: String,

    /// Rendered markdown body. Empty for the landing page, whose body
    /// is entirely template-driven.
    pub content_html: String,

    /// Source path relative to the docs root.
    pub source_rel: String,

    pub landing: bool,
}

/// Everything needed to write a site: rendered pages plus the shared
/// navigation structure.
#[derive(Debug)]
pub struct SiteModel {
    pub pages: Vec<PageDoc>,
    pub nav: Navigation,
}

/// Renders a docs tree into a [`SiteModel`].
pub struct SiteBuilder<'h> {
    config: Config,
    renderer: MarkdownRenderer<'h>,
}

impl<'h> SiteBuilder<'h> {
    pub fn new(config: Config, highlighter: &'h Highlighter) -> Self {
        let renderer = MarkdownRenderer::new(highlighter);
        Self { config, renderer }
    }

    /// Scan, validate, and render the whole docs tree. Ordering is the
    /// sorted walk order, so repeated builds produce identical output.
    pub fn build(&self) -> Result<SiteModel, BuildError> {
        let docs_dir = self.config.docs_dir();
        if !docs_dir.is_dir() {
            return Err(BuildError::MissingDocsDir(docs_dir));
        }

        let sources = discover_markdown_files(&docs_dir, &self.config.output_dir())?;
        let nav = validated_nav(&self.config, &sources)?;

        let mut pages = Vec::with_capacity(sources.len());
        for source_rel in &sources {
            let route = html_output_path(source_rel);
            tracing::debug!("rendering {source_rel} -> {route}");

            if source_rel == LANDING_SOURCE {
                pages.push(PageDoc {
                    route,
                    title: self.config.site.title.clone(),
                    content_html: String::new(),
                    source_rel: source_rel.clone(),
                    landing: true,
                });
                continue;
            }

            let markdown = fs::read_to_string(docs_dir.join(source_rel))?;
            let title = extract_title(&markdown).unwrap_or_else(|| file_stem(source_rel));
            let content_html = self.renderer.render(&markdown);

            pages.push(PageDoc {
                route,
                title,
                content_html,
                source_rel: source_rel.clone(),
                landing: false,
            });
        }

        Ok(SiteModel { pages, nav })
    }
}

/// Validate the docs tree against the navigation without rendering
/// anything. Returns the number of markdown sources found.
pub fn check_site_layout(config: &Config) -> Result<usize, BuildError> {
    let docs_dir = config.docs_dir();
    if !docs_dir.is_dir() {
        return Err(BuildError::MissingDocsDir(docs_dir));
    }

    let sources = discover_markdown_files(&docs_dir, &config.output_dir())?;
    validated_nav(config, &sources)?;
    Ok(sources.len())
}

fn validated_nav(config: &Config, sources: &[String]) -> Result<Navigation, BuildError> {
    let nav = Navigation::from_config(config);
    let discovered: BTreeSet<String> = sources
        .iter()
        .filter(|s| s.as_str() != LANDING_SOURCE)
        .cloned()
        .collect();
    nav.validate(&discovered).map_err(BuildError::NavMismatch)?;
    Ok(nav)
}

/// All markdown files under `docs_dir`, as forward-slash paths relative
/// to it, in sorted walk order.
fn discover_markdown_files(docs_dir: &Path, output_dir: &Path) -> Result<Vec<String>, BuildError> {
    let mut files = Vec::new();

    let walker = WalkDir::new(docs_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.path() == output_dir {
                return false;
            }
            let name = entry.file_name().to_string_lossy();
            !EXCLUDED_DIRS.contains(&name.as_ref())
        });

    for entry in walker.filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(docs_dir)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        files.push(rel);
    }

    Ok(files)
}

fn file_stem(source_rel: &str) -> String {
    let name = source_rel.rsplit('/').next().unwrap_or(source_rel);
    name.strip_suffix(".md").unwrap_or(name).to_string()
}
