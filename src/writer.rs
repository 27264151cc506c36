//! # Repository Writers
//!
//! Writing a [`Repository`] to disk is expressed by the [`RepositoryWriter`]
//! trait so that other target layouts can be added next to the maven one.
//!
//! [`MavenRepositoryWriter`] produces the standard layered layout:
//!
//! ```text
//! <target_dir>/<group-as-path>/<artifact>/<version>/<file>
//! ```
//!
//! The content-hash directories of the gradle cache are collapsed away. When
//! two entries of the same version share a file name, the one listed last
//! wins and the overwrite is reported as a warning.
//!
//! The actual file copy goes through [`PathCopier`], which lets tests
//! observe or fail individual copies without touching the writer logic.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::model::Repository;

/// Copies a single file from one location to another
pub trait PathCopier {
    /// Copy `src` to `dst`, replacing `dst` if it already exists.
    fn copy(&self, src: &Path, dst: &Path) -> std::io::Result<()>;
}

/// [`PathCopier`] backed by `std::fs::copy`
#[derive(Debug, Default, Clone, Copy)]
pub struct FsCopier;

impl PathCopier for FsCopier {
    fn copy(&self, src: &Path, dst: &Path) -> std::io::Result<()> {
        fs::copy(src, dst).map(|_| ())
    }
}

/// Counters describing a completed write
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub groups: usize,
    pub artifacts: usize,
    pub versions: usize,
    pub files_copied: usize,
    /// Copies that replaced a file written earlier in the same run
    pub files_overwritten: usize,
}

/// Writes a repository model out as a directory tree
pub trait RepositoryWriter {
    /// Write every entry of `repo` below `target_dir`.
    ///
    /// The first failure aborts the write; files written before it stay on
    /// disk.
    fn write(&self, repo: &Repository, target_dir: &Path) -> Result<WriteSummary>;
}

/// Writes the maven `<group-path>/<artifact>/<version>/<file>` layout
#[derive(Debug, Default)]
pub struct MavenRepositoryWriter<C = FsCopier> {
    copier: C,
}

impl MavenRepositoryWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: PathCopier> MavenRepositoryWriter<C> {
    /// Create a writer that copies files through `copier`
    pub fn with_copier(copier: C) -> Self {
        Self { copier }
    }
}

impl<C: PathCopier> RepositoryWriter for MavenRepositoryWriter<C> {
    fn write(&self, repo: &Repository, target_dir: &Path) -> Result<WriteSummary> {
        debug!("Writing maven repository to {}", target_dir.display());
        create_dir_all(target_dir)?;

        let mut summary = WriteSummary::default();
        for group in repo.groups() {
            summary.groups += 1;
            let group_path = target_dir.join(group.as_path());

            for artifact in group.artifacts() {
                summary.artifacts += 1;
                let artifact_path = group_path.join(artifact.identifier());

                for (version, entries) in artifact.versioned_entries() {
                    summary.versions += 1;
                    let version_path = artifact_path.join(version);
                    let mut written: HashSet<&str> = HashSet::new();

                    for entry in entries {
                        create_dir_all(&version_path)?;

                        let src = entry.full_path();
                        let dst = version_path.join(entry.file_name());
                        if !written.insert(entry.file_name()) {
                            warn!(
                                "{}:{}:{} has several '{}' files, keeping {}",
                                group.identifier(),
                                artifact.identifier(),
                                version,
                                entry.file_name(),
                                src.display()
                            );
                            summary.files_overwritten += 1;
                        }

                        trace!("Copying {} -> {}", src.display(), dst.display());
                        self.copier
                            .copy(&src, &dst)
                            .map_err(|source| Error::Copy { src, dst, source })?;
                        summary.files_copied += 1;
                    }
                }
            }
        }

        debug!("Copied {} files", summary.files_copied);
        Ok(summary)
    }
}

fn create_dir_all(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| Error::CreateDir {
        path: PathBuf::from(path),
        source,
    })
}
