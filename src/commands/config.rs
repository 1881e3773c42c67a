//! Get, get-bool and set commands

use std::path::PathBuf;

use crate::cli::{KeyArgs, SetArgs};
use crate::error::{Result, config::missing_key};
use crate::store::ConfigDocument;

fn open(share_dir: Option<PathBuf>) -> Result<ConfigDocument> {
    super::start(share_dir)?.load_config()
}

/// Print one value
pub fn get(share_dir: Option<PathBuf>, args: &KeyArgs) -> Result<()> {
    let doc = open(share_dir)?;
    let value = doc
        .get(&args.section, &args.key)
        .ok_or_else(|| missing_key(&args.section, &args.key))?;
    println!("{value}");
    Ok(())
}

/// Print one value coerced to a boolean
pub fn get_bool(share_dir: Option<PathBuf>, args: &KeyArgs) -> Result<()> {
    let doc = open(share_dir)?;
    println!("{}", doc.get_bool(&args.section, &args.key)?);
    Ok(())
}

/// Set one value and commit the document
pub fn set(share_dir: Option<PathBuf>, args: &SetArgs) -> Result<()> {
    let mut doc = open(share_dir)?;
    doc.set(&args.section, &args.key, args.value.as_str());
    doc.write()?;
    tracing::info!(section = %args.section, key = %args.key, "updated configuration");
    Ok(())
}
