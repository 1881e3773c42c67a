//! Paths command implementation
//!
//! Prints the candidate locations without touching the filesystem.

use std::path::PathBuf;

use console::Style;

use crate::error::Result;
use crate::startup::StartupOptions;

/// Show candidate config paths in priority order
pub fn run(share_dir: Option<PathBuf>) -> Result<()> {
    let options = StartupOptions::from_env(share_dir)?;
    let resolver = options.resolver();

    println!("{}", Style::new().bold().apply_to("Candidates:"));
    for (i, candidate) in resolver.candidates()?.iter().enumerate() {
        println!("  {}. {}", i + 1, candidate.path().display());
    }
    println!(
        "{} {}",
        Style::new().bold().apply_to("Template:"),
        options.template_path().display()
    );
    println!(
        "{} {}",
        Style::new().bold().apply_to("Resources:"),
        resolver.resources_dir()?.display()
    );
    Ok(())
}
