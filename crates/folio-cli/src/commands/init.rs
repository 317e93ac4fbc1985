use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use folio_core::{AppConfig, Portfolio};

/// Write a default config and a content file next to it
pub fn run(config_path: &Path, force: bool) -> Result<()> {
    let content_path = config_path.with_file_name("portfolio.toml");

    for path in [config_path, content_path.as_path()] {
        if path.exists() && !force {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }
    }

    let mut config = AppConfig::default();
    config.general.content_path = Some(content_path.clone());
    config
        .save_to(config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    let content = Portfolio::default().to_toml()?;
    std::fs::write(&content_path, content)
        .with_context(|| format!("Failed to write {}", content_path.display()))?;

    info!("Wrote default config and content");
    println!("Config:  {}", config_path.display());
    println!("Content: {}", content_path.display());
    println!("Edit the content file, then run `folio`.");
    Ok(())
}
