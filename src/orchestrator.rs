//! Orchestrator for the complete conversion
//!
//! Coordinates the scan and write steps behind a single call:
//!
//! 1. Scan the gradle cache into a [`Repository`](crate::model::Repository)
//! 2. Remove the target directory when a pre-clean is requested
//! 3. Write the repository to the target directory
//!
//! Each run is a full rebuild. Nothing is rolled back when a later step
//! fails, so a failed write after a pre-clean leaves a partial repository.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::scanner;
use crate::writer::{MavenRepositoryWriter, RepositoryWriter, WriteSummary};

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Root of the gradle cache, usually `~/.gradle`
    pub gradle_cache_dir: PathBuf,
    /// Root of the maven repository to (re)generate
    pub target_mvn_dir: PathBuf,
    /// Remove `target_mvn_dir` before writing
    pub pre_clean_mvn_dir: bool,
}

/// Outcome of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of entries found in the cache
    pub entries_scanned: usize,
    /// Whether an existing target directory was removed
    pub cleaned: bool,
    pub write: WriteSummary,
}

/// Run the conversion with the maven layout
pub fn execute(config: &RunConfig) -> Result<RunSummary> {
    execute_with_writer(config, &MavenRepositoryWriter::new())
}

/// Run the conversion with an arbitrary [`RepositoryWriter`]
pub fn execute_with_writer(config: &RunConfig, writer: &dyn RepositoryWriter) -> Result<RunSummary> {
    let repo = scanner::scan(&config.gradle_cache_dir)?;
    info!(
        "Scanned {} groups, {} artifacts from {}",
        repo.len(),
        repo.artifact_count(),
        config.gradle_cache_dir.display()
    );

    let cleaned = if config.pre_clean_mvn_dir {
        clean_target(&config.target_mvn_dir)?
    } else {
        false
    };

    let write = writer.write(&repo, &config.target_mvn_dir)?;
    info!(
        "Wrote {} files to {}",
        write.files_copied,
        config.target_mvn_dir.display()
    );

    Ok(RunSummary {
        entries_scanned: repo.entry_count(),
        cleaned,
        write,
    })
}

/// Recursively delete `target_dir`
///
/// Returns `false` when there was nothing to delete.
pub fn clean_target(target_dir: &Path) -> Result<bool> {
    match fs::remove_dir_all(target_dir) {
        Ok(()) => {
            info!("Removed {}", target_dir.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist, nothing to clean", target_dir.display());
            Ok(false)
        }
        Err(source) => Err(Error::Clean {
            path: target_dir.to_path_buf(),
            source,
        }),
    }
}
