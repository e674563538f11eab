//! Validate the docs tree against the navigation without writing output.

use anyhow::{Context, Result};
use docsmith_core::{check_site_layout, Config};
use std::path::Path;

pub fn check_site(config_path: &Path) -> Result<()> {
    let config = Config::from_file(config_path).context("Failed to load configuration")?;
    let count = check_site_layout(&config).context("Site layout check failed")?;
    println!("ok: {} markdown sources match the navigation", count);
    Ok(())
}
