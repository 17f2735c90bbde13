//! Error types for mortar
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read config file '{}': {error}", .path.display())]
    Read { path: PathBuf, error: String },

    /// Config file is not valid TOML
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A target section is malformed
    #[error("Invalid target section 'build.{name}': {error}")]
    TargetSection { name: String, error: String },
}

/// Build errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// Requested target is not declared in the config
    #[error("Target '{name}' not found in config files")]
    TargetNotFound { name: String },

    /// Target declares a type with no matching build strategy
    #[error("Target '{target}' has unknown type '{type_name}'")]
    UnknownTargetType { target: String, type_name: String },

    /// Toolchain command could not be started
    #[error("Failed to run '{command}': {error}")]
    CommandSpawn { command: String, error: String },

    /// Toolchain command ran and exited nonzero
    #[error("Command '{command}' exited with status {code}")]
    Toolchain { command: String, code: i32 },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{}': {error}", .path.display())]
    CreateDir { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{}': {error}", .path.display())]
    ReadFile { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{}': {error}", .path.display())]
    WriteFile { path: PathBuf, error: String },
}

/// Top-level mortar error type
#[derive(Error, Debug)]
pub enum MortarError {
    /// Config error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Build error
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}

impl MortarError {
    /// Process exit code for this error.
    ///
    /// A failing toolchain invocation terminates the process with the
    /// tool's own exit status; every other error exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Build(BuildError::Toolchain { code, .. }) => *code,
            _ => 1,
        }
    }
}
