//! Show-config command implementation
//!
//! Dumps the fully resolved settings - file contents merged over the
//! built-in defaults - as TOML.

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::settings::Settings;

/// Execute the show-config command
pub async fn execute(project_dir: &Path) -> Result<()> {
    let settings = Settings::load(project_dir)?;

    let rendered = settings
        .to_toml()
        .context("Failed to render resolved settings")?;
    print!("{rendered}");

    Ok(())
}
