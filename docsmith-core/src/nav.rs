//! Sidebar navigation model and build-time validation.

use crate::config::{Config, NavSectionConfig};
use crate::paths::html_output_path;
use std::collections::BTreeSet;
use std::fmt;

/// Ordered sidebar structure, built once from config and immutable
/// thereafter.
#[derive(Debug, Clone)]
pub struct Navigation {
    pub sections: Vec<NavSection>,
}

#[derive(Debug, Clone)]
pub struct NavSection {
    pub name: String,

    /// Directory prefix matched against routes for the active state.
    pub dir: String,

    /// Landing-card glyph; defaults to the section's initial.
    pub icon: String,

    /// Landing-card accent color.
    pub color: String,

    /// Landing-card description.
    pub description: String,

    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone)]
pub struct NavItem {
    pub title: String,

    /// Source path relative to the docs root.
    pub file: String,

    /// Output-relative href, derived from `file` via the path mapper.
    pub href: String,
}

impl Navigation {
    pub fn from_config(config: &Config) -> Self {
        let sections = config.nav.iter().map(NavSection::from_config).collect();
        Self { sections }
    }

    /// Check that the declared page set is exactly the discovered
    /// markdown set. Divergence in either direction fails the build.
    pub fn validate(&self, discovered: &BTreeSet<String>) -> Result<(), NavMismatch> {
        let declared: BTreeSet<String> = self
            .sections
            .iter()
            .flat_map(|s| s.items.iter().map(|i| i.file.clone()))
            .collect();

        let missing: Vec<String> = declared.difference(discovered).cloned().collect();
        let orphans: Vec<String> = discovered.difference(&declared).cloned().collect();

        if missing.is_empty() && orphans.is_empty() {
            Ok(())
        } else {
            Err(NavMismatch { missing, orphans })
        }
    }
}

impl NavSection {
    fn from_config(section: &NavSectionConfig) -> Self {
        let icon = section.icon.clone().unwrap_or_else(|| {
            section
                .name
                .chars()
                .next()
                .map(|c| c.to_string())
                .unwrap_or_default()
        });

        Self {
            name: section.name.clone(),
            dir: section.dir.clone(),
            icon,
            color: section.color.clone().unwrap_or_else(|| "#888888".to_string()),
            description: section.description.clone().unwrap_or_default(),
            items: section
                .pages
                .iter()
                .map(|page| NavItem {
                    title: page.title.clone(),
                    href: html_output_path(&page.file),
                    file: page.file.clone(),
                })
                .collect(),
        }
    }

    /// Whether this section contains the current route.
    pub fn is_active(&self, route: &str) -> bool {
        route.starts_with(&format!("{}/", self.dir))
    }
}

/// Divergence between the navigation table and the scanned docs tree.
#[derive(Debug)]
pub struct NavMismatch {
    /// Declared in the navigation but absent on disk.
    pub missing: Vec<String>,

    /// Present on disk but not declared in the navigation.
    pub orphans: Vec<String>,
}

impl fmt::Display for NavMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if !self.missing.is_empty() {
            write!(f, "nav entries with no file: {}", self.missing.join(", "))?;
            first = false;
        }
        if !self.orphans.is_empty() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "files not in nav: {}", self.orphans.join(", "))?;
        }
        Ok(())
    }
}
