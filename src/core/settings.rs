//! Build settings (mortar.toml) parsing
//!
//! The settings file is the only configuration source for a mortar project.
//! Every key has a default, so a missing file resolves to a usable
//! configuration; a present but malformed file is a fatal error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The settings file name, looked up in the project directory.
pub const SETTINGS_FILE: &str = "mortar.toml";

/// Resolved build settings, loaded once per invocation and read-only
/// for the lifetime of a build.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Toolchain configuration and target sections
    #[serde(default)]
    pub build: BuildSection,

    /// Output directory roots
    #[serde(default)]
    pub dirs: DirsSection,
}

/// The `[build]` section: toolchain command line pieces plus the
/// `[build.<name>]` target sections nested under it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildSection {
    /// Compiler/linker command
    #[serde(default = "default_exec")]
    pub exec: String,

    /// Flags inserted into every compile invocation
    #[serde(default = "default_compile_flags")]
    pub compile_flags: String,

    /// Flags inserted into every link invocation
    #[serde(default)]
    pub link_flags: String,

    /// Whitespace-separated source suffixes, each with its leading dot
    #[serde(default = "default_file_extensions")]
    pub file_extensions: String,

    /// Raw `[build.<name>]` target sections, in declaration order.
    /// Typed by the target resolver.
    #[serde(flatten)]
    pub targets: toml::Table,
}

/// The `[dirs]` section: the three output roots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirsSection {
    /// Intermediate object-file root
    #[serde(default = "default_tmp_dir")]
    pub tmp: PathBuf,

    /// Static-library output root
    #[serde(default = "default_lib_dir")]
    pub lib: PathBuf,

    /// Executable output root
    #[serde(default = "default_bin_dir")]
    pub bin: PathBuf,
}

/// One `[build.<name>]` target section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetSection {
    /// Source directory, relative to the project directory
    pub source: PathBuf,

    /// Build strategy name (`exec` default, or `static`)
    #[serde(rename = "type", default = "default_target_type")]
    pub target_type: String,
}

fn default_exec() -> String {
    "cc".to_string()
}

fn default_compile_flags() -> String {
    "-c".to_string()
}

fn default_file_extensions() -> String {
    ".c".to_string()
}

fn default_tmp_dir() -> PathBuf {
    PathBuf::from("tmp")
}

fn default_lib_dir() -> PathBuf {
    PathBuf::from("lib")
}

fn default_bin_dir() -> PathBuf {
    PathBuf::from("bin")
}

pub(crate) fn default_target_type() -> String {
    "exec".to_string()
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            exec: default_exec(),
            compile_flags: default_compile_flags(),
            link_flags: String::new(),
            file_extensions: default_file_extensions(),
            targets: toml::Table::new(),
        }
    }
}

impl Default for DirsSection {
    fn default() -> Self {
        Self {
            tmp: default_tmp_dir(),
            lib: default_lib_dir(),
            bin: default_bin_dir(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            build: BuildSection::default(),
            dirs: DirsSection::default(),
        }
    }
}

impl Settings {
    /// Load settings from `mortar.toml` in the project directory.
    ///
    /// A missing file resolves to pure defaults.
    pub fn load(project_dir: &Path) -> Result<Self, ConfigError> {
        let path = project_dir.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Read {
            path: path.clone(),
            error: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Load settings from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize the resolved settings to a TOML string
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl BuildSection {
    /// The configured source suffixes, split out of `file_extensions`.
    pub fn extensions(&self) -> Vec<&str> {
        self.file_extensions.split_whitespace().collect()
    }
}
