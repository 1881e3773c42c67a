//! Resource mirroring
//!
//! Resource bundles (nametag layouts, themes) ship beside the executable under
//! `resources/<name>/` and are copied to `<home>/.taxidi/resources/<name>/` the
//! first time the destination is missing. An existing destination is never
//! merged into or overwritten, and each resource succeeds or fails on its own.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result, fs::resource_copy_failed};
use crate::fs::{CopyTreeError, copy_tree};

/// Resources mirrored by default
pub const DEFAULT_RESOURCES: &[&str] = &["nametag", "themes"];

/// Named resource directories and the roots they are copied between
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSet {
    pub names: Vec<String>,
    pub source_root: PathBuf,
    pub dest_root: PathBuf,
}

impl ResourceSet {
    pub fn new<I, S>(names: I, source_root: impl Into<PathBuf>, dest_root: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            source_root: source_root.into(),
            dest_root: dest_root.into(),
        }
    }

    /// The default `nametag` and `themes` resources
    pub fn with_defaults(source_root: impl Into<PathBuf>, dest_root: impl Into<PathBuf>) -> Self {
        Self::new(DEFAULT_RESOURCES.iter().copied(), source_root, dest_root)
    }

    pub fn source(&self, name: &str) -> PathBuf {
        self.source_root.join(name)
    }

    pub fn destination(&self, name: &str) -> PathBuf {
        self.dest_root.join(name)
    }
}

/// How a resource ended up present at its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorStatus {
    /// Copied from the source, with the number of files copied
    Copied { files: usize },
    /// The destination was already there and was left untouched
    AlreadyPresent,
    /// The destination appeared while copying (a race or an earlier partial run)
    ConcurrentlyCreated,
}

/// Result of mirroring one resource
#[derive(Debug)]
pub struct MirrorOutcome {
    pub name: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub result: Result<MirrorStatus>,
}

impl MirrorOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Mirror every resource in `set`, one outcome per name in order.
pub fn ensure(set: &ResourceSet) -> Vec<MirrorOutcome> {
    set.names
        .iter()
        .map(|name| {
            let source = set.source(name);
            let destination = set.destination(name);
            let result = ensure_one(name, &source, &destination);
            MirrorOutcome {
                name: name.clone(),
                source,
                destination,
                result,
            }
        })
        .collect()
}

fn ensure_one(name: &str, source: &Path, destination: &Path) -> Result<MirrorStatus> {
    if destination.exists() {
        tracing::debug!(resource = name, path = %destination.display(), "resource already present");
        return Ok(MirrorStatus::AlreadyPresent);
    }

    tracing::debug!(
        resource = name,
        from = %source.display(),
        to = %destination.display(),
        "copying resources"
    );
    match copy_tree(source, destination) {
        Ok(files) => {
            tracing::info!(resource = name, files, "copied resources");
            Ok(MirrorStatus::Copied { files })
        }
        Err(CopyTreeError::DestinationExists { path }) => {
            tracing::warn!(
                resource = name,
                path = %path.display(),
                "lower tree directory exists"
            );
            Ok(MirrorStatus::ConcurrentlyCreated)
        }
        Err(e) => {
            tracing::error!(resource = name, error = %e, "error while copying resource");
            Err(resource_copy_failed(name, e.to_string()))
        }
    }
}

/// Errors of the resources whose mirroring failed
pub fn failures(outcomes: &[MirrorOutcome]) -> Vec<&ConfigError> {
    outcomes
        .iter()
        .filter_map(|outcome| outcome.result.as_ref().err())
        .collect()
}
