//! Command implementations for the taxidi-conf CLI

pub mod completions;
pub mod config;
pub mod init;
pub mod paths;
pub mod themes;
pub mod version;

use std::path::PathBuf;

use crate::error::Result;
use crate::startup::{self, Startup, StartupOptions};

/// Run the startup sequence for a command
pub(crate) fn start(share_dir: Option<PathBuf>) -> Result<Startup> {
    let options = StartupOptions::from_env(share_dir)?;
    startup::initialize(&options)
}
