//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("navigation section '{0}' declares no pages")]
    EmptySection(String),
}

/// Main configuration struct matching the docsmith.yml schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub paths: PathsConfig,

    /// Sidebar navigation, in display order.
    #[serde(default)]
    pub nav: Vec<NavSectionConfig>,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,

    #[serde(default)]
    pub intro: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root of the markdown tree; the landing README.md lives here too.
    pub docs: PathBuf,
    pub output: PathBuf,

    #[serde(default = "default_styles")]
    pub styles: PathBuf,
}

fn default_styles() -> PathBuf {
    PathBuf::from("styles")
}

/// One sidebar section plus the metadata its landing card needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavSectionConfig {
    pub name: String,

    /// Directory prefix used for active-section matching.
    pub dir: String,

    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    pub pages: Vec<NavPageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavPageConfig {
    pub title: String,

    /// Source path relative to the docs root; the output href is derived
    /// from this, so the two can never disagree.
    pub file: String,
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        // The landing page links each section to its first page, so an
        // empty section cannot be rendered.
        for section in &config.nav {
            if section.pages.is_empty() {
                return Err(ConfigError::EmptySection(section.name.clone()));
            }
        }

        Ok(config)
    }

    /// Get the docs directory, resolved relative to the config file.
    pub fn docs_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.docs)
    }

    /// Get the output directory, resolved relative to the config file.
    pub fn output_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.output)
    }

    /// Get the static-assets directory, resolved relative to the config file.
    pub fn styles_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.styles)
    }

    /// Resolve a path relative to the config file location.
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(config_path) = &self.config_path {
            if let Some(parent) = config_path.parent() {
                parent.join(path)
            } else {
                path.to_path_buf()
            }
        } else {
            path.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const MINIMAL_YML: &str = r#"
site:
  title: "Test Site"
  description: "A test site"
paths:
  docs: docs
  output: dist
nav:
  - name: Guide
    dir: guide
    pages:
      - title: Overview
        file: guide/overview.md
"#;

    #[test]
    fn test_load_minimal_config() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join("docsmith.yml");
        fs::write(&config_path, MINIMAL_YML)?;

        let config = Config::from_file(&config_path)?;
        assert_eq!(config.site.title, "Test Site");
        assert_eq!(config.paths.styles, PathBuf::from("styles"));
        assert_eq!(config.nav.len(), 1);
        assert_eq!(config.nav[0].pages[0].file, "guide/overview.md");

        // Paths resolve relative to the config file location
        assert_eq!(config.docs_dir(), dir.path().join("docs"));
        assert_eq!(config.output_dir(), dir.path().join("dist"));
        Ok(())
    }

    #[test]
    fn test_empty_section_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join("docsmith.yml");
        fs::write(
            &config_path,
            r#"
site:
  title: "Test"
  description: "Desc"
paths:
  docs: docs
  output: dist
nav:
  - name: Empty
    dir: empty
    pages: []
"#,
        )?;

        let err = Config::from_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySection(name) if name == "Empty"));
        Ok(())
    }
}
