//! Themes command implementation

use std::path::PathBuf;

use crate::error::Result;

/// List valid themes, one per line
pub fn run(share_dir: Option<PathBuf>) -> Result<()> {
    let startup = super::start(share_dir)?;
    for theme in startup.themes().list_themes() {
        println!("{theme}");
    }
    Ok(())
}
