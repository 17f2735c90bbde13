//! Compile step
//!
//! Invokes the external compiler for one source file, producing one
//! object file. Skips the invocation entirely when the cached object is
//! still valid.

use std::path::Path;

use crate::cli::output::{progress, progress_line};
use crate::core::cache;
use crate::core::discovery::SourceFile;
use crate::core::settings::Settings;
use crate::error::MortarError;
use crate::infra::{filesystem, toolchain};

/// Compile one source file into `object`, unless the cache says the
/// object is still fresh.
///
/// `project_dir` must be absolute; the compiler runs with the target's
/// source root as its working directory and is handed the object path
/// resolved against the project directory.
pub fn compile_file(
    settings: &Settings,
    project_dir: &Path,
    source_root: &Path,
    source: &SourceFile,
    object: &Path,
    force: bool,
) -> Result<(), MortarError> {
    if let Some(parent) = object.parent() {
        filesystem::create_dir_all(parent)?;
    }

    progress(&format!("Building {}... ", source.rel.display()));

    if !force && cache::is_cache_valid(&source.path, object) {
        progress_line("cached");
        return Ok(());
    }

    let command = format!(
        "{} {} -o {} {}",
        settings.build.exec,
        settings.build.compile_flags,
        project_dir.join(object).display(),
        source.rel.display()
    );
    let command = toolchain::expand_env_vars(&command);
    tracing::debug!(command = %command, "compile");

    toolchain::run(&command, Some(source_root)).map_err(MortarError::from)?;

    progress_line("done");
    Ok(())
}
