//! Build command implementation
//!
//! Implements `mortar build` to compile stale sources and assemble each
//! target's artifact.

use anyhow::Result;
use std::path::Path;

use crate::core::builder;
use crate::core::settings::Settings;

/// Build options
pub struct BuildOptions {
    /// Build only the named targets (all configured targets if empty)
    pub targets: Vec<String>,
    /// Recompile every file regardless of cache validity
    pub force: bool,
}

/// Execute the build command
pub async fn execute(project_dir: &Path, options: BuildOptions) -> Result<()> {
    let settings = Settings::load(project_dir)?;

    builder::build_targets(project_dir, &settings, &options.targets, options.force)?;

    Ok(())
}
