//! Source discovery
//!
//! Enumerates source files under a target's source root and maps each one
//! to its object-file path.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A discovered source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Full path, as walked from the source root
    pub path: PathBuf,
    /// Path relative to the source root; drives progress lines and the
    /// object mapping
    pub rel: PathBuf,
}

/// Find every source file under `source_root` whose file name ends with
/// one of the configured suffixes.
///
/// The walk never follows symlinks out of the root and visits entries in
/// file-name order, so the result is stable across runs. A missing source
/// root yields an empty list.
pub fn find_source_files(source_root: &Path, extensions: &[&str]) -> Vec<SourceFile> {
    let mut sources = Vec::new();

    for entry in WalkDir::new(source_root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !extensions.iter().any(|ext| name.ends_with(ext)) {
            continue;
        }

        let Ok(rel) = path.strip_prefix(source_root) else {
            continue;
        };

        sources.push(SourceFile {
            path: path.to_path_buf(),
            rel: rel.to_path_buf(),
        });
    }

    sources
}

/// Object path for one source file: `object_root / target / rel`, with the
/// source extension replaced by `o`.
pub fn object_path(object_root: &Path, target: &str, source_rel: &Path) -> PathBuf {
    object_root.join(target).join(source_rel).with_extension("o")
}
