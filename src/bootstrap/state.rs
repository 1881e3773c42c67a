//! First-run state machine
//!
//! ```text
//! Searching ──found──▶ Found
//!     │
//!     └─exhausted──▶ Creating ──copied──▶ Created
//!                        │
//!                        └──failed──▶ Failed
//! ```

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::fs::ensure_dir;
use crate::paths::Candidate;

/// States of a single bootstrap run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapState {
    /// Probing the candidate at `index`
    Searching { index: usize },
    /// An existing readable config was found
    Found(PathBuf),
    /// No candidate exists; creating `target` from the template
    Creating { target: PathBuf },
    /// The template was copied to the target
    Created(PathBuf),
    /// The template could not be copied to the target
    Failed { target: PathBuf, reason: String },
}

impl BootstrapState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BootstrapState::Found(_) | BootstrapState::Created(_) | BootstrapState::Failed { .. }
        )
    }
}

/// Drives [`BootstrapState`] transitions over a fixed candidate list
pub(crate) struct Machine<'a> {
    candidates: &'a [Candidate],
    template: &'a Path,
    /// Non-fatal parent directory creation error, kept for diagnostics
    pub(crate) directory_error: Option<String>,
}

impl<'a> Machine<'a> {
    pub(crate) fn new(candidates: &'a [Candidate], template: &'a Path) -> Self {
        Self {
            candidates,
            template,
            directory_error: None,
        }
    }

    /// Run from `Searching { index: 0 }` until a terminal state
    pub(crate) fn run(&mut self) -> BootstrapState {
        let mut state = BootstrapState::Searching { index: 0 };
        while !state.is_terminal() {
            state = self.step(state);
        }
        state
    }

    pub(crate) fn step(&mut self, state: BootstrapState) -> BootstrapState {
        match state {
            BootstrapState::Searching { index } => self.search(index),
            BootstrapState::Creating { target } => self.create(target),
            terminal => terminal,
        }
    }

    fn search(&self, index: usize) -> BootstrapState {
        if let Some(candidate) = self.candidates.get(index) {
            let path = candidate.path();
            tracing::debug!(path = %path.display(), "trying config path");
            if is_readable_file(&path) {
                return BootstrapState::Found(path);
            }
            tracing::debug!(path = %path.display(), "no config at candidate path");
            return BootstrapState::Searching { index: index + 1 };
        }

        match self.candidates.last() {
            Some(last) => {
                tracing::warn!("configuration doesn't exist");
                BootstrapState::Creating {
                    target: last.path(),
                }
            }
            None => BootstrapState::Failed {
                target: PathBuf::new(),
                reason: "no candidate locations".to_string(),
            },
        }
    }

    fn create(&mut self, target: PathBuf) -> BootstrapState {
        if let Some(parent) = parent_dir(&target) {
            // Best effort: a failure here is logged and the copy is still attempted.
            if let Err(e) = ensure_dir(parent) {
                tracing::error!(
                    directory = %parent.display(),
                    error = %e,
                    "failed to create application directory"
                );
                self.directory_error = Some(e.to_string());
            }
        }

        tracing::debug!(
            template = %self.template.display(),
            target = %target.display(),
            "creating default configuration"
        );
        match copy_template(self.template, &target) {
            Ok(()) => {
                tracing::info!(path = %target.display(), "created config from template");
                BootstrapState::Created(target)
            }
            Err(e) => {
                tracing::error!(
                    path = %target.display(),
                    error = %e,
                    "could not create config, is the destination writable?"
                );
                BootstrapState::Failed {
                    target,
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Open for read and close immediately; directories do not count.
fn is_readable_file(path: &Path) -> bool {
    File::open(path)
        .and_then(|file| file.metadata())
        .is_ok_and(|metadata| metadata.is_file())
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Copy the template byte-for-byte through a temporary file beside `target`.
///
/// Nothing is left at `target` on failure, and an existing file at `target`
/// is never replaced.
fn copy_template(template: &Path, target: &Path) -> io::Result<()> {
    let mut source = File::open(template)?;
    let dir = parent_dir(target).unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir)?;
    io::copy(&mut source, staged.as_file_mut())?;
    staged.as_file().sync_all()?;
    staged.persist_noclobber(target).map_err(|e| e.error)?;
    Ok(())
}
