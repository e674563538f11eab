//! Build command implementation.

use anyhow::{Context, Result};
use askama::Template;
use docsmith_core::{asset_prefix, Config, Highlighter, PageDoc, SiteBuilder, SiteModel};
use docsmith_render::{cards_for, sidebar_for, LandingTemplate, PageTemplate};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Light/dark switching for the dual-rendered code blocks. Each block
/// carries both renderings; this picks one per color scheme.
const SYNTAX_CSS: &str = "\
.code-dark { display: none; }
@media (prefers-color-scheme: dark) {
  .code-light { display: none; }
  .code-dark { display: block; }
}
";

/// Build the documentation site, writing the full output tree.
pub fn build_site(config_path: &Path) -> Result<()> {
    tracing::info!("Loading config from {:?}", config_path);
    let config = Config::from_file(config_path).context("Failed to load configuration")?;

    tracing::info!("Building site: {}", config.site.title);

    let highlighter = Highlighter::new().context("Failed to load syntax highlighter")?;
    let model = SiteBuilder::new(config.clone(), &highlighter)
        .build()
        .context("Failed to build site")?;

    // Rebuild the output tree from scratch so stale pages never survive
    let output_dir = config.output_dir();
    if output_dir.exists() {
        fs::remove_dir_all(&output_dir).context("Failed to clear output directory")?;
    }
    fs::create_dir_all(&output_dir).context("Failed to create output directory")?;

    copy_styles(&config)?;
    fs::write(output_dir.join("styles").join("syntax.css"), SYNTAX_CSS)
        .context("Failed to write syntax stylesheet")?;

    for page in &model.pages {
        let html = render_page(&config, &model, page)?;
        let out_path = output_dir.join(&page.route);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out_path, html)
            .with_context(|| format!("Failed to write {}", out_path.display()))?;
    }

    tracing::info!("✓ built {} pages", model.pages.len());
    Ok(())
}

fn render_page(config: &Config, model: &SiteModel, page: &PageDoc) -> Result<String> {
    let root_prefix = asset_prefix(&page.route);

    let html = if page.landing {
        LandingTemplate {
            site_title: config.site.title.clone(),
            site_description: config.site.description.clone(),
            intro: config.site.intro.clone().unwrap_or_default(),
            has_intro: config.site.intro.is_some(),
            cards: cards_for(&model.nav, &root_prefix),
            root_prefix,
        }
        .render()
    } else {
        PageTemplate {
            title: page.title.clone(),
            site_title: config.site.title.clone(),
            content: page.content_html.clone(),
            sidebar: sidebar_for(&model.nav, &page.route, &root_prefix),
            root_prefix,
        }
        .render()
    };

    html.with_context(|| format!("Failed to render {}", page.route))
}

/// Copy the static-assets directory into `<output>/styles`. A missing
/// source directory is a warning, not an error.
fn copy_styles(config: &Config) -> Result<()> {
    let styles_dir = config.styles_dir();
    let dest_root = config.output_dir().join("styles");
    fs::create_dir_all(&dest_root)?;

    if !styles_dir.is_dir() {
        tracing::warn!("styles directory not found: {}", styles_dir.display());
        return Ok(());
    }

    for entry in WalkDir::new(&styles_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(&styles_dir)
            .unwrap_or(entry.path());
        let dest = dest_root.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
    }

    Ok(())
}
