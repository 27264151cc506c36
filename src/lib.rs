//! # Gradle Cache to Maven Repository
//!
//! This library turns the module storage of a local gradle cache into a
//! standard maven repository layout. It is used by the `gradle-mvn-repo`
//! command-line tool, but every step is also usable on its own.
//!
//! ## Quick Example
//!
//! ```
//! use gradle_mvn_repo::model::{Artifact, Entry, Group, Repository};
//!
//! let mut artifact = Artifact::new("bar");
//! artifact.append_entry("1.0.0", Entry::new("bar-1.0.0.jar", "/cache/abcd1234"));
//!
//! let mut group = Group::new("org.foo", "/cache/org.foo");
//! group.add_artifact(artifact);
//!
//! let mut repo = Repository::new();
//! repo.add_group(group);
//!
//! assert_eq!(repo.get("org.foo").unwrap().as_path(), "org/foo");
//! assert_eq!(repo.entry_count(), 1);
//! ```
//!
//! ## Core Concepts
//!
//! - **Model (`model`)**: `Repository` -> `Group` -> `Artifact` -> `Entry`,
//!   with merge semantics for groups and artifacts seen more than once.
//! - **Scanner (`scanner`)**: reads
//!   `<cache>/caches/modules-*/files-*/<group>/<artifact>/<version>/<hash>/<file>`
//!   into a `Repository`.
//! - **Writers (`writer`)**: the `RepositoryWriter` trait and its maven
//!   implementation producing `<group-path>/<artifact>/<version>/<file>`.
//! - **Orchestrator (`orchestrator`)**: scan, optional pre-clean, write.
//!
//! ## Execution Flow
//!
//! 1.  **Scan**: discover groups, then artifacts, versions and entries.
//! 2.  **Pre-clean** (optional): remove the target directory.
//! 3.  **Write**: copy every entry into the maven layout.

pub mod error;
pub mod model;
pub mod orchestrator;
pub mod output;
pub mod path;
pub mod scanner;
pub mod writer;

#[cfg(test)]
mod path_proptest;
