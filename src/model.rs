//! # Repository Model
//!
//! The in-memory view of a dependency repository, built by the
//! [`scanner`](crate::scanner) and consumed by a
//! [`RepositoryWriter`](crate::writer::RepositoryWriter).
//!
//! Ownership is a strict tree:
//!
//! - [`Repository`] owns its [`Group`]s, keyed by dotted group identifier.
//! - [`Group`] owns its [`Artifact`]s.
//! - [`Artifact`] owns one ordered list of [`Entry`] values per version.
//!
//! ## Merge Semantics
//!
//! The same group can show up under several `modules-*/files-*` roots of a
//! gradle cache. Inserting a group that already exists merges the two views
//! instead of replacing one with the other. Artifacts inside a group are
//! identified by their identifier alone, so adding an artifact that is
//! already present merges its versions into the existing one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One physical file belonging to a specific artifact version
///
/// Two entries are equal when both the file name and the containing
/// directory match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    file_name: String,
    containing_directory: PathBuf,
}

impl Entry {
    /// Create an entry for `file_name` located in `containing_directory`
    pub fn new(file_name: impl Into<String>, containing_directory: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            containing_directory: containing_directory.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn containing_directory(&self) -> &Path {
        &self.containing_directory
    }

    /// Location of the file on disk
    pub fn full_path(&self) -> PathBuf {
        self.containing_directory.join(&self.file_name)
    }
}

/// A named unit of distribution with its files grouped by version
///
/// Equality is by identifier only: within a group, two artifacts with the
/// same identifier are the same artifact.
#[derive(Debug, Clone)]
pub struct Artifact {
    identifier: String,
    versions: BTreeMap<String, Vec<Entry>>,
}

impl PartialEq for Artifact {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Artifact {}

impl Artifact {
    /// Create an artifact with no versions
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            versions: BTreeMap::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Append an entry to the list of `version`, creating the list if needed
    ///
    /// The first append to a version yields a list holding exactly that one
    /// entry; it is not inserted twice. No deduplication happens here: the
    /// same entry appended twice is listed twice.
    pub fn append_entry(&mut self, version: impl Into<String>, entry: Entry) {
        self.versions.entry(version.into()).or_default().push(entry);
    }

    /// Iterate over version strings
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    /// Entries of a single version, if the version is known
    pub fn entries(&self, version: &str) -> Option<&[Entry]> {
        self.versions.get(version).map(Vec::as_slice)
    }

    /// Iterate over every version with its entries
    pub fn versioned_entries(&self) -> impl Iterator<Item = (&str, &[Entry])> {
        self.versions
            .iter()
            .map(|(version, entries)| (version.as_str(), entries.as_slice()))
    }

    /// Number of entries across all versions
    pub fn entry_count(&self) -> usize {
        self.versions.values().map(Vec::len).sum()
    }

    /// Merge another view of the same artifact into this one
    ///
    /// Versions unknown to `self` are taken over as-is. For known versions,
    /// only entries not already listed are appended.
    pub fn merge(&mut self, other: Artifact) {
        for (version, entries) in other.versions {
            let existing = self.versions.entry(version).or_default();
            for entry in entries {
                if !existing.contains(&entry) {
                    existing.push(entry);
                }
            }
        }
    }
}

/// A named collection of artifacts, e.g. `org.example`
#[derive(Debug, Clone)]
pub struct Group {
    identifier: String,
    source_paths: Vec<PathBuf>,
    artifacts: Vec<Artifact>,
}

impl Group {
    /// Create an empty group discovered at `source_path`
    pub fn new(identifier: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            identifier: identifier.into(),
            source_paths: vec![source_path.into()],
            artifacts: Vec::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The directory the group was first discovered in
    pub fn source_path(&self) -> &Path {
        &self.source_paths[0]
    }

    /// Every cache directory this group was discovered in
    pub fn source_paths(&self) -> &[PathBuf] {
        &self.source_paths
    }

    /// Relative repository path of the group, e.g. `org/example`
    pub fn as_path(&self) -> String {
        crate::path::group_id_to_path(&self.identifier)
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Look up an artifact by identifier
    pub fn artifact(&self, identifier: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.identifier == identifier)
    }

    /// Add an artifact, merging it into an existing one with the same identifier
    pub fn add_artifact(&mut self, artifact: Artifact) {
        match self.artifacts.iter_mut().find(|a| **a == artifact) {
            Some(existing) => existing.merge(artifact),
            None => self.artifacts.push(artifact),
        }
    }

    /// Merge another view of this group into `self`
    ///
    /// Groups with a different identifier are left untouched.
    pub fn merge(&mut self, other: Group) {
        if self.identifier != other.identifier {
            return;
        }
        for path in other.source_paths {
            if !self.source_paths.contains(&path) {
                self.source_paths.push(path);
            }
        }
        for artifact in other.artifacts {
            self.add_artifact(artifact);
        }
    }
}

/// Root aggregate: every group of the repository keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct Repository {
    groups: BTreeMap<String, Group>,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a group, merging it into an existing group with the same identifier
    pub fn add_group(&mut self, group: Group) {
        match self.groups.get_mut(group.identifier()) {
            Some(existing) => existing.merge(group),
            None => {
                self.groups.insert(group.identifier.clone(), group);
            }
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&Group> {
        self.groups.get(identifier)
    }

    pub(crate) fn get_mut(&mut self, identifier: &str) -> Option<&mut Group> {
        self.groups.get_mut(identifier)
    }

    /// Iterate over groups in identifier order
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    /// Identifiers of every group in the repository
    pub fn group_ids(&self) -> Vec<String> {
        self.groups.keys().cloned().collect()
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of artifacts across all groups
    pub fn artifact_count(&self) -> usize {
        self.groups.values().map(|g| g.artifacts.len()).sum()
    }

    /// Total number of entries across all groups, artifacts and versions
    pub fn entry_count(&self) -> usize {
        self.groups
            .values()
            .flat_map(|g| g.artifacts.iter())
            .map(Artifact::entry_count)
            .sum()
    }
}
