//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up build scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file's raw bytes from the test project
    pub fn read_bytes(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Read a file's modification time
    pub fn mtime(&self, name: &str) -> SystemTime {
        std::fs::metadata(self.dir.path().join(name))
            .expect("Failed to stat file")
            .modified()
            .expect("Failed to read mtime")
    }

    /// Set a file's modification time
    pub fn set_mtime(&self, name: &str, time: SystemTime) {
        let file = std::fs::OpenOptions::new()
            .write(true)
            .open(self.dir.path().join(name))
            .expect("Failed to open file");
        file.set_modified(time).expect("Failed to set mtime");
    }

    /// Install the fake toolchain script and return its absolute path.
    ///
    /// The script mimics a compiler/linker just enough for the build
    /// pipeline: it concatenates every non-flag argument into the `-o`
    /// output, and exits 2 when any input path contains `fail`.
    pub fn install_fake_toolchain(&self) -> PathBuf {
        let script = self.dir.path().join("fakecc");
        std::fs::write(&script, FAKE_TOOLCHAIN).expect("Failed to write fake toolchain");
        make_executable(&script);
        script
    }

    /// Write a mortar.toml wiring the fake toolchain to the given
    /// target sections.
    pub fn write_config(&self, exec: &str, target_sections: &str) {
        let config = format!(
            r#"[build]
exec = "{exec}"
compile_flags = "-c"
link_flags = ""
file_extensions = ".c"

[dirs]
tmp = "tmp"
lib = "lib"
bin = "bin"

{target_sections}"#
        );
        self.create_file("mortar.toml", &config);
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

const FAKE_TOOLCHAIN: &str = r#"#!/bin/sh
out=""
inputs=""
while [ $# -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift 2 ;;
    -*) shift ;;
    *) inputs="$inputs $1"; shift ;;
  esac
done
for f in $inputs; do
  case "$f" in
    *fail*) exit 2 ;;
  esac
done
: > "$out"
for f in $inputs; do
  cat "$f" >> "$out"
done
exit 0
"#;

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path)
        .expect("Failed to stat script")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("Failed to set permissions");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
