//! # Gradle Cache Scanner
//!
//! Builds a [`Repository`] from a gradle cache directory. The cache stores
//! downloaded modules as
//!
//! ```text
//! <cache_dir>/caches/modules-*/files-*/<group>/<artifact>/<version>/<content-hash>/<file>
//! ```
//!
//! Scanning happens in two passes:
//!
//! 1.  **Group discovery**: every directory directly under a
//!     `caches/modules-*/files-*` match becomes a [`Group`]. A group that
//!     recurs under several matches is merged into one.
//! 2.  **Artifact discovery**: every group directory is walked down to its
//!     content-hash directories and every file found there becomes an
//!     [`Entry`] of its artifact version.
//!
//! Directory listings are sorted by name, so the resulting model does not
//! depend on the order the platform returns them in. Nothing is checked
//! before it is listed: every child at group, artifact, version and
//! content-hash level is expected to be a directory, and one that is a file,
//! vanished or cannot be read aborts the scan with [`Error::Scan`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::model::{Artifact, Entry, Group, Repository};

/// Location of the module storage relative to the cache root
const MODULE_STORAGE_PATTERN: &str = "caches/modules-*/files-*";

/// Scan a gradle cache directory into a [`Repository`]
pub fn scan(cache_dir: &Path) -> Result<Repository> {
    debug!("Scanning gradle cache at {}", cache_dir.display());

    let mut repo = Repository::new();
    discover_groups(cache_dir, &mut repo)?;
    discover_artifacts(&mut repo)?;

    debug!(
        "Found {} groups, {} artifacts, {} entries",
        repo.len(),
        repo.artifact_count(),
        repo.entry_count()
    );
    Ok(repo)
}

/// Find every `caches/modules-*/files-*` directory below `cache_dir`
pub fn module_storage_dirs(cache_dir: &Path) -> Result<Vec<PathBuf>> {
    let root = cache_dir.to_str().ok_or_else(|| Error::InvalidPath {
        message: format!("cache directory is not valid UTF-8: {}", cache_dir.display()),
    })?;
    let pattern = format!(
        "{}/{}",
        glob::Pattern::escape(root.trim_end_matches('/')),
        MODULE_STORAGE_PATTERN
    );

    let mut dirs = glob::glob(&pattern)?.collect::<std::result::Result<Vec<_>, _>>()?;
    dirs.sort();
    Ok(dirs)
}

/// First pass: register a group for each directory under the module storage
fn discover_groups(cache_dir: &Path, repo: &mut Repository) -> Result<()> {
    let storage_dirs = module_storage_dirs(cache_dir)?;
    if storage_dirs.is_empty() {
        warn!(
            "No {} directory found under {}",
            MODULE_STORAGE_PATTERN,
            cache_dir.display()
        );
    }

    for storage_dir in storage_dirs {
        trace!("Module storage: {}", storage_dir.display());
        for (group_id, group_path) in list_dir(&storage_dir)? {
            repo.add_group(Group::new(group_id, group_path));
        }
    }
    Ok(())
}

/// Second pass: attach the artifacts found under each group's directories
fn discover_artifacts(repo: &mut Repository) -> Result<()> {
    for group_id in repo.group_ids() {
        let source_paths = match repo.get(&group_id) {
            Some(group) => group.source_paths().to_vec(),
            None => continue,
        };

        let mut artifacts = Vec::new();
        for group_path in &source_paths {
            for (artifact_id, artifact_path) in list_dir(group_path)? {
                artifacts.push(load_artifact(&artifact_path, artifact_id)?);
            }
        }

        if let Some(group) = repo.get_mut(&group_id) {
            for artifact in artifacts {
                group.add_artifact(artifact);
            }
        }
    }
    Ok(())
}

/// Load every version of the artifact stored at `artifact_path`
fn load_artifact(artifact_path: &Path, artifact_id: String) -> Result<Artifact> {
    trace!("Loading artifact {}", artifact_path.display());

    let mut artifact = Artifact::new(artifact_id);
    for (version, version_path) in list_dir(artifact_path)? {
        for (_hash, hash_path) in list_dir(&version_path)? {
            for (file_name, _) in list_dir(&hash_path)? {
                artifact.append_entry(version.clone(), Entry::new(file_name, hash_path.clone()));
            }
        }
    }
    Ok(artifact)
}

/// List every child of `dir` as `(name, path)` pairs, sorted by name
fn list_dir(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let scan_error = |source: io::Error| Error::Scan {
        path: dir.to_path_buf(),
        source,
    };

    let mut children = Vec::new();
    for entry in fs::read_dir(dir).map_err(scan_error)? {
        let entry = entry.map_err(scan_error)?;
        let name = entry.file_name().into_string().map_err(|name| {
            scan_error(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("name {:?} is not valid UTF-8", name),
            ))
        })?;
        children.push((name, entry.path()));
    }
    children.sort();
    Ok(children)
}
