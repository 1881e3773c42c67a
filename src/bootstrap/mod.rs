//! Configuration resolution and first-run bootstrap
//!
//! [`resolve`] walks the candidate list in priority order and returns the
//! first existing configuration. When none exists, the last candidate is
//! created by copying the shipped template. The outcome is always reported as
//! a [`BootstrapStatus`] value, never as an error, because a first run is an
//! expected state that the caller must branch on.

mod state;

use std::fmt;
use std::path::{Path, PathBuf};

pub use state::BootstrapState;

use crate::paths::Candidate;
use state::Machine;

/// Outcome of a bootstrap run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStatus {
    /// An existing configuration was found
    Resolved,
    /// A new configuration was created from the template
    CreatedNew,
    /// The template could not be copied; the reported path is not usable
    ErrorNotWritable,
}

impl fmt::Display for BootstrapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BootstrapStatus::Resolved => "resolved",
            BootstrapStatus::CreatedNew => "created-new",
            BootstrapStatus::ErrorNotWritable => "error-not-writable",
        };
        f.write_str(s)
    }
}

/// Final path and status of a bootstrap run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub path: PathBuf,
    pub status: BootstrapStatus,
    /// Reason the copy failed, when status is `ErrorNotWritable`
    pub failure: Option<String>,
    /// Parent directory creation error that did not stop the copy attempt
    pub directory_error: Option<String>,
}

/// Resolve the configuration file, creating it from `template` if no
/// candidate exists.
pub fn resolve(candidates: &[Candidate], template: &Path) -> Resolution {
    let mut machine = Machine::new(candidates, template);
    let state = machine.run();
    let directory_error = machine.directory_error.take();

    let (path, status, failure) = match state {
        BootstrapState::Found(path) => (path, BootstrapStatus::Resolved, None),
        BootstrapState::Created(path) => (path, BootstrapStatus::CreatedNew, None),
        BootstrapState::Failed { target, reason } => {
            (target, BootstrapStatus::ErrorNotWritable, Some(reason))
        }
        // run() only returns terminal states
        BootstrapState::Searching { .. } | BootstrapState::Creating { .. } => (
            PathBuf::new(),
            BootstrapStatus::ErrorNotWritable,
            Some("bootstrap did not finish".to_string()),
        ),
    };

    Resolution {
        path,
        status,
        failure,
        directory_error,
    }
}
