//! taxidi-conf - configuration bootstrap for Taxidi
//!
//! Locates the application's `config.ini`, creates it from a shipped template
//! on first run, and mirrors the shipped resource directories (nametags,
//! themes) into the per-user application directory.
//!
//! ```no_run
//! use taxidi_conf::startup::{self, StartupOptions};
//!
//! let options = StartupOptions::from_env(None)?;
//! let startup = startup::initialize(&options)?;
//! if startup.is_first_run() {
//!     println!("Welcome to Taxidi");
//! }
//! startup.ensure_usable()?;
//!
//! let mut config = startup.load_config()?;
//! config.set("database", "username", "foo");
//! config.write()?;
//! # Ok::<(), taxidi_conf::error::ConfigError>(())
//! ```

pub mod bootstrap;
pub mod cli;
pub mod coerce;
pub mod commands;
pub mod error;
pub mod fs;
pub mod logging;
pub mod paths;
pub mod resources;
pub mod startup;
pub mod store;
pub mod themes;

pub use bootstrap::{BootstrapStatus, Resolution};
pub use coerce::{BoolInput, parse_bool};
pub use error::{ConfigError, Result};
pub use startup::{Startup, StartupOptions, initialize};
pub use store::ConfigDocument;
pub use themes::ThemeCatalog;
