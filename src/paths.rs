//! Candidate configuration locations
//!
//! The resolver computes where a configuration may live without touching the
//! filesystem. Candidates are tried in priority order by
//! [`crate::bootstrap::resolve`]:
//!
//! 1. `<cwd>/config.ini`
//! 2. `<home>/.taxidi/config.ini`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Per-user application directory name under the home directory
pub const APP_DIR: &str = ".taxidi";

/// Configuration file name
pub const CONFIG_FILE: &str = "config.ini";

/// Template copied on first run, shipped beside the executable
pub const TEMPLATE_FILE: &str = "config.ini.template";

/// Resource bundles directory, both in the share dir and the app dir
pub const RESOURCES_DIR: &str = "resources";

/// User-profile variable, checked first
pub const PROFILE_VAR: &str = "USERPROFILE";

/// Generic home variable, checked second
pub const HOME_VAR: &str = "HOME";

/// A location that may hold the configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub directory: PathBuf,
    pub file_name: String,
}

impl Candidate {
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }

    /// Full path of the candidate file
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Computes candidate paths from a working directory and an optional home
#[derive(Debug, Clone)]
pub struct PathResolver {
    cwd: PathBuf,
    home: Option<PathBuf>,
}

impl PathResolver {
    pub fn new(cwd: impl Into<PathBuf>, home: Option<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            home,
        }
    }

    /// Home directory, or [`ConfigError::NoHomeDirectory`] when none was found
    pub fn home(&self) -> Result<&Path> {
        self.home.as_deref().ok_or(ConfigError::NoHomeDirectory)
    }

    /// `<home>/.taxidi`
    pub fn app_dir(&self) -> Result<PathBuf> {
        Ok(self.home()?.join(APP_DIR))
    }

    /// `<home>/.taxidi/resources`
    pub fn resources_dir(&self) -> Result<PathBuf> {
        Ok(self.app_dir()?.join(RESOURCES_DIR))
    }

    /// Candidates in priority order: working directory first, then the
    /// per-user application directory.
    pub fn candidates(&self) -> Result<Vec<Candidate>> {
        Ok(vec![
            Candidate::new(&self.cwd, CONFIG_FILE),
            Candidate::new(self.app_dir()?, CONFIG_FILE),
        ])
    }
}

/// Resolve the home directory from an environment lookup.
///
/// The user-profile variable wins over the generic home variable; empty values
/// are skipped.
pub fn home_from<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    [PROFILE_VAR, HOME_VAR]
        .into_iter()
        .filter_map(|var| lookup(var))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Resolve the home directory from the process environment
pub fn home_from_env() -> Option<PathBuf> {
    home_from(|var| std::env::var(var).ok())
}
