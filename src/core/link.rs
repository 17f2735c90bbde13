//! Link step
//!
//! Assembles a target's object files into its artifact: a flat static
//! archive written by byte concatenation, or an executable produced by
//! the external linker.

use std::path::{Path, PathBuf};

use crate::cli::output::{progress, progress_line};
use crate::core::settings::Settings;
use crate::error::MortarError;
use crate::infra::{filesystem, toolchain};

/// Concatenate the objects, in the given order, into `<lib>/<target>.lib`.
///
/// This is a flat byte concatenation, not a member-indexed archive
/// format; no external tool is involved.
pub fn link_static_library(
    project_dir: &Path,
    settings: &Settings,
    target: &str,
    objects: &[PathBuf],
) -> Result<(), MortarError> {
    progress(&format!("Linking static library {target}... "));

    let lib_dir = project_dir.join(&settings.dirs.lib);
    filesystem::create_dir_all(&lib_dir)?;

    let archive = lib_dir.join(format!("{target}.lib"));
    filesystem::concat_files(objects, &archive)?;

    progress_line("done");
    Ok(())
}

/// Hand the objects, in the given order, to the external linker to
/// produce `<bin>/<target>`.
pub fn link_executable(
    project_dir: &Path,
    settings: &Settings,
    target: &str,
    objects: &[PathBuf],
) -> Result<(), MortarError> {
    progress(&format!("Linking executable {target}... "));

    let bin_dir = project_dir.join(&settings.dirs.bin);
    filesystem::create_dir_all(&bin_dir)?;

    let bin_path = bin_dir.join(target);
    let inputs: Vec<String> = objects.iter().map(|p| p.display().to_string()).collect();
    let command = format!(
        "{} {} -o {} {}",
        settings.build.exec,
        settings.build.link_flags,
        bin_path.display(),
        inputs.join(" ")
    );
    let command = toolchain::expand_env_vars(&command);
    tracing::debug!(command = %command, "link");

    toolchain::run(&command, Some(project_dir)).map_err(MortarError::from)?;

    progress_line("done");
    Ok(())
}
