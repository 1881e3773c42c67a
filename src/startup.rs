//! One-shot startup sequence
//!
//! [`initialize`] is called once by the application entry point. It resolves
//! or creates the configuration and mirrors the resource directories, and
//! hands back an explicit [`Startup`] value that the rest of the program reads
//! from. Nothing happens implicitly when the crate is loaded.

use std::path::{Path, PathBuf};

use crate::bootstrap::{self, BootstrapStatus};
use crate::error::{Result, fs::io_error, fs::not_writable};
use crate::paths::{self, PathResolver, TEMPLATE_FILE};
use crate::resources::{self, DEFAULT_RESOURCES, MirrorOutcome, ResourceSet};
use crate::store::ConfigDocument;
use crate::themes::ThemeCatalog;

/// Environment variable overriding the share directory
pub const SHARE_DIR_VAR: &str = "TAXIDI_SHARE_DIR";

/// Inputs of the startup sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupOptions {
    /// Working directory, searched first
    pub cwd: PathBuf,
    /// User home directory; `None` makes startup fail with `NoHomeDirectory`
    pub home: Option<PathBuf>,
    /// Directory shipping `config.ini.template` and `resources/`
    pub share_dir: PathBuf,
    /// Resource directories to mirror
    pub resources: Vec<String>,
}

impl StartupOptions {
    pub fn new(cwd: impl Into<PathBuf>, home: Option<PathBuf>, share_dir: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            home,
            share_dir: share_dir.into(),
            resources: DEFAULT_RESOURCES.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Options from the process environment.
    ///
    /// `share_dir` falls back to the directory of the running executable.
    pub fn from_env(share_dir: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| io_error(format!("Failed to get current directory: {e}")))?;
        let share_dir = match share_dir {
            Some(dir) => dir,
            None => executable_dir()?,
        };
        Ok(Self::new(cwd, paths::home_from_env(), share_dir))
    }

    pub fn template_path(&self) -> PathBuf {
        self.share_dir.join(TEMPLATE_FILE)
    }

    pub fn resolver(&self) -> PathResolver {
        PathResolver::new(&self.cwd, self.home.clone())
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| io_error(format!("Failed to locate executable: {e}")))?;
    let exe = dunce::canonicalize(&exe).unwrap_or(exe);
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| io_error("Executable has no parent directory"))
}

/// Resolved configuration state for the life of the process
#[derive(Debug)]
pub struct Startup {
    pub app_dir: PathBuf,
    pub config_path: PathBuf,
    pub status: BootstrapStatus,
    /// Why creating the configuration failed, when status is `ErrorNotWritable`
    pub failure: Option<String>,
    pub resources: Vec<MirrorOutcome>,
}

/// Resolve the configuration and mirror resources.
///
/// Fails only with `NoHomeDirectory`, before touching the filesystem. Every
/// other outcome is carried in the returned [`Startup`].
pub fn initialize(options: &StartupOptions) -> Result<Startup> {
    let resolver = options.resolver();
    let candidates = resolver.candidates()?;
    let app_dir = resolver.app_dir()?;
    let resources_dir = resolver.resources_dir()?;

    let resolution = bootstrap::resolve(&candidates, &options.template_path());

    let set = ResourceSet::new(
        options.resources.iter().cloned(),
        options.share_dir.join(paths::RESOURCES_DIR),
        resources_dir,
    );
    let resources = resources::ensure(&set);
    let failed = resources::failures(&resources).len();
    if failed > 0 {
        tracing::warn!(failed, "some resources could not be copied");
    }

    Ok(Startup {
        app_dir,
        config_path: resolution.path,
        status: resolution.status,
        failure: resolution.failure,
        resources,
    })
}

impl Startup {
    pub fn is_first_run(&self) -> bool {
        self.status == BootstrapStatus::CreatedNew
    }

    /// Refuse to continue with a configuration that could not be created
    pub fn ensure_usable(&self) -> Result<()> {
        if self.status == BootstrapStatus::ErrorNotWritable {
            return Err(not_writable(
                self.config_path.display().to_string(),
                self.failure
                    .clone()
                    .unwrap_or_else(|| "destination not writable".to_string()),
            ));
        }
        Ok(())
    }

    /// Load the resolved configuration
    pub fn load_config(&self) -> Result<ConfigDocument> {
        self.ensure_usable()?;
        ConfigDocument::load(&self.config_path)
    }

    pub fn themes(&self) -> ThemeCatalog {
        ThemeCatalog::for_app_dir(&self.app_dir)
    }
}
