//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = CacheFixture::new().with_entry("org.foo", "bar", "1.0", "abcd", "bar-1.0.jar", "jar");
//!     fixture.command().assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    pub use super::CacheFixture;
    #[allow(unused_imports)]
    pub use super::{read_tree, DEFAULT_FILES_DIR};
}

/// Module storage used when a test does not care about the gradle version.
pub const DEFAULT_FILES_DIR: &str = "caches/modules-2/files-2.1";

/// A temporary gradle cache plus a temporary target directory.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = CacheFixture::new()
///     .with_entry("org.foo", "bar", "1.0.0", "abcd1234", "bar-1.0.0.jar", "jar");
///
/// fixture.command().assert().success();
/// assert!(fixture.target_dir().join("org/foo/bar/1.0.0/bar-1.0.0.jar").exists());
/// ```
pub struct CacheFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl CacheFixture {
    /// Create a fixture with an empty cache directory and no target directory.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("gradle")
            .create_dir_all()
            .expect("Failed to create cache directory");
        Self { temp_dir }
    }

    /// Add a cached file under the default `modules-2/files-2.1` storage.
    pub fn with_entry(
        self,
        group: &str,
        artifact: &str,
        version: &str,
        hash: &str,
        file_name: &str,
        content: &str,
    ) -> Self {
        self.with_entry_in(DEFAULT_FILES_DIR, group, artifact, version, hash, file_name, content)
    }

    /// Add a cached file under an explicit module storage directory.
    #[allow(clippy::too_many_arguments)]
    pub fn with_entry_in(
        self,
        files_dir: &str,
        group: &str,
        artifact: &str,
        version: &str,
        hash: &str,
        file_name: &str,
        content: &str,
    ) -> Self {
        self.temp_dir
            .child("gradle")
            .child(files_dir)
            .child(group)
            .child(artifact)
            .child(version)
            .child(hash)
            .child(file_name)
            .write_str(content)
            .expect("Failed to write cache entry");
        self
    }

    /// Add a file to the target directory before the run.
    pub fn with_target_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child("m2")
            .child(path)
            .write_str(content)
            .expect("Failed to write target file");
        self
    }

    /// Root of the gradle cache.
    pub fn cache_dir(&self) -> PathBuf {
        self.temp_dir.path().join("gradle")
    }

    /// Root of the generated maven repository.
    pub fn target_dir(&self) -> PathBuf {
        self.temp_dir.path().join("m2")
    }

    /// The generated file for `relative` below the target directory.
    pub fn target_child(&self, relative: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child("m2").child(relative)
    }

    /// A command running the binary against this fixture.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gradle-mvn-repo");
        cmd.arg("--gradle_cache_dir")
            .arg(self.cache_dir())
            .arg("--target_mvn_dir")
            .arg(self.target_dir())
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for CacheFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Read every file below `root` as `(relative path, content)`, sorted by path.
#[allow(dead_code)]
pub fn read_tree(root: &Path) -> Vec<(String, Vec<u8>)> {
    let mut files: Vec<(String, Vec<u8>)> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e
                .path()
                .strip_prefix(root)
                .expect("walked path is below root")
                .to_string_lossy()
                .replace('\\', "/");
            let content = std::fs::read(e.path()).expect("Failed to read file");
            (relative, content)
        })
        .collect();
    files.sort();
    files
}
