//! Build orchestration
//!
//! Composes resolution, discovery, compilation, and linking into the
//! sequential build pipeline: one target at a time, one file at a time,
//! first failure aborts the whole invocation.

use std::path::Path;

use crate::cli::output::progress_line;
use crate::core::settings::Settings;
use crate::core::target::{self, TargetDescriptor, TargetKind};
use crate::core::{compile, discovery, link};
use crate::error::MortarError;

/// Build the requested targets, or every resolved target when the
/// request is empty.
///
/// Unknown requested names fail before any building starts. `project_dir`
/// must be absolute; every relative config path resolves against it.
pub fn build_targets(
    project_dir: &Path,
    settings: &Settings,
    requested: &[String],
    force: bool,
) -> Result<(), MortarError> {
    let resolved = target::resolve_targets(project_dir, settings)?;
    let selected = target::select_targets(&resolved, requested)?;

    tracing::info!(targets = selected.len(), force, "starting build");

    for (name, section) in selected {
        // The type check happens here, as each target is reached, so
        // earlier targets of the same invocation keep their artifacts.
        let descriptor = TargetDescriptor::from_section(name, section)?;
        build_target(project_dir, settings, &descriptor, force)?;
    }

    Ok(())
}

fn build_target(
    project_dir: &Path,
    settings: &Settings,
    descriptor: &TargetDescriptor,
    force: bool,
) -> Result<(), MortarError> {
    progress_line(&format!("Building {} target...", descriptor.name));

    let source_root = project_dir.join(&descriptor.source_root);
    let extensions = settings.build.extensions();
    let sources = discovery::find_source_files(&source_root, &extensions);
    if sources.is_empty() {
        tracing::debug!(name = %descriptor.name, root = %source_root.display(), "no source files found");
    }

    let object_root = project_dir.join(&settings.dirs.tmp);
    let mut objects = Vec::with_capacity(sources.len());
    for source in &sources {
        let object = discovery::object_path(&object_root, &descriptor.name, &source.rel);
        compile::compile_file(settings, project_dir, &source_root, source, &object, force)?;
        objects.push(object);
    }

    match descriptor.kind {
        TargetKind::Executable => {
            link::link_executable(project_dir, settings, &descriptor.name, &objects)?;
        }
        TargetKind::StaticLibrary => {
            link::link_static_library(project_dir, settings, &descriptor.name, &objects)?;
        }
    }

    progress_line(&format!("Building {} target done", descriptor.name));
    Ok(())
}
