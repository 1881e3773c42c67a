//! Init command implementation
//!
//! Runs the startup sequence and reports where the configuration lives, whether
//! it was just created, and what happened to each resource directory.

use std::path::PathBuf;

use console::Style;

use crate::bootstrap::BootstrapStatus;
use crate::error::Result;
use crate::resources::{MirrorOutcome, MirrorStatus};

/// Run init command
pub fn run(share_dir: Option<PathBuf>) -> Result<()> {
    let startup = super::start(share_dir)?;

    println!(
        "{} {}",
        Style::new().bold().apply_to("Configuration:"),
        startup.config_path.display()
    );
    println!(
        "{} {}",
        Style::new().bold().apply_to("Status:"),
        status_style(startup.status).apply_to(startup.status)
    );
    if startup.is_first_run() {
        println!("Created a default configuration from the template.");
    }

    if !startup.resources.is_empty() {
        println!("{}", Style::new().bold().apply_to("Resources:"));
        for outcome in &startup.resources {
            println!("  {:<10} {}", outcome.name, describe(outcome));
        }
    }

    startup.ensure_usable()
}

fn status_style(status: BootstrapStatus) -> Style {
    match status {
        BootstrapStatus::Resolved => Style::new().green(),
        BootstrapStatus::CreatedNew => Style::new().yellow(),
        BootstrapStatus::ErrorNotWritable => Style::new().red().bold(),
    }
}

fn describe(outcome: &MirrorOutcome) -> String {
    match &outcome.result {
        Ok(MirrorStatus::Copied { files }) => {
            let label = if *files == 1 { "file" } else { "files" };
            format!("copied ({files} {label})")
        }
        Ok(MirrorStatus::AlreadyPresent) => "present".to_string(),
        Ok(MirrorStatus::ConcurrentlyCreated) => "present (created meanwhile)".to_string(),
        Err(e) => format!("error: {e}"),
    }
}
