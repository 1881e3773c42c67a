//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::startup::SHARE_DIR_VAR;

/// taxidi-conf - Taxidi configuration bootstrap
///
/// Locate or create the Taxidi configuration and its resource directories.
#[derive(Parser, Debug)]
#[command(
    name = "taxidi-conf",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Configuration bootstrap for the Taxidi check-in application",
    long_about = "Finds config.ini in the working directory or in ~/.taxidi/, creates it from \
                  config.ini.template on first run, and mirrors the shipped nametag and theme \
                  resources into ~/.taxidi/resources/.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  taxidi-conf init\n    \
                  taxidi-conf get database driver\n    \
                  taxidi-conf set database username foo\n    \
                  taxidi-conf get-bool interface fullscreen\n    \
                  taxidi-conf themes"
)]
pub struct Cli {
    /// Directory holding config.ini.template and resources/ (defaults to the executable's directory)
    #[arg(long, global = true, env = SHARE_DIR_VAR, value_name = "DIR")]
    pub share_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve or create the configuration and mirror resources
    Init,

    /// Print one configuration value
    Get(KeyArgs),

    /// Print one configuration value as a boolean
    GetBool(KeyArgs),

    /// Set one configuration value and write the file
    Set(SetArgs),

    /// List valid themes
    Themes,

    /// Show candidate configuration paths
    Paths,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Section and key of a configuration value
#[derive(Parser, Debug)]
pub struct KeyArgs {
    /// Section name (e.g. database)
    pub section: String,

    /// Key name (e.g. driver)
    pub key: String,
}

/// Arguments for the set command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Change the database user:\n    taxidi-conf set database username foo\n\n\
                  Enable fullscreen:\n    taxidi-conf set interface fullscreen true")]
pub struct SetArgs {
    /// Section name
    pub section: String,

    /// Key name
    pub key: String,

    /// New value
    pub value: String,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
