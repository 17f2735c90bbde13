//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod show_config;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile source files based on config
    Build {
        /// Selective targets to build (all configured targets if empty)
        #[arg(value_name = "target")]
        targets: Vec<String>,

        /// Build without cache
        #[arg(short, long)]
        force: bool,
    },

    /// Show the resolved configuration
    ShowConfig,
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Self::Build { targets, force } => {
                let current_dir = std::env::current_dir()?;
                let options = build::BuildOptions { targets, force };
                build::execute(&current_dir, options).await
            }
            Self::ShowConfig => {
                let current_dir = std::env::current_dir()?;
                show_config::execute(&current_dir).await
            }
        }
    }
}
