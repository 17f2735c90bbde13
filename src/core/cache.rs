//! Cache validity
//!
//! Decides, per source file, whether its compiled object is still usable.
//! This is the sole correctness mechanism for incremental builds.

use std::path::Path;
use std::time::SystemTime;

/// True only when the object exists and is strictly newer than its source.
///
/// Equal timestamps count as stale; filesystem timestamp resolution can
/// make two rapid writes appear equal. Any metadata failure on either
/// side is treated as "not cached".
pub fn is_cache_valid(source: &Path, object: &Path) -> bool {
    let (Ok(source_mtime), Ok(object_mtime)) = (mtime(source), mtime(object)) else {
        return false;
    };

    source_mtime < object_mtime
}

fn mtime(path: &Path) -> std::io::Result<SystemTime> {
    std::fs::metadata(path)?.modified()
}
