//! Theme discovery
//!
//! A theme is a directory under `<app dir>/resources/themes` that contains a
//! `theme.conf` marker. Only the listing is handled here; the theme content
//! itself is read by the interface.

use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::RESOURCES_DIR;

/// Name of the themes resource directory
pub const THEMES_RESOURCE: &str = "themes";

/// Marker file that makes a directory a usable theme
pub const THEME_MARKER: &str = "theme.conf";

/// Lists valid themes in one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCatalog {
    directory: PathBuf,
}

impl ThemeCatalog {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Catalog of `<app_dir>/resources/themes`
    pub fn for_app_dir(app_dir: &Path) -> Self {
        Self::new(app_dir.join(RESOURCES_DIR).join(THEMES_RESOURCE))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Valid theme names, sorted ascending.
    ///
    /// A missing or unreadable directory yields an empty list. Entries that are
    /// not directories, or lack the marker file, are skipped silently. Nothing
    /// is cached; every call reads the directory again.
    pub fn list_themes(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(
                    directory = %self.directory.display(),
                    error = %e,
                    "cannot list themes"
                );
                return Vec::new();
            }
        };

        let mut themes: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.path().is_dir())
            .filter(|entry| entry.path().join(THEME_MARKER).is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        themes.sort();
        themes.dedup();

        tracing::debug!(?themes, "found themes");
        themes
    }

    pub fn contains(&self, name: &str) -> bool {
        self.theme_path(name).is_some()
    }

    /// Directory of a valid theme
    pub fn theme_path(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || Path::new(name).components().count() != 1 {
            return None;
        }
        let dir = self.directory.join(name);
        (dir.is_dir() && dir.join(THEME_MARKER).is_file()).then_some(dir)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn catalog(temp: &TempDir) -> ThemeCatalog {
        let dir = temp.path().join("themes");
        fs::create_dir_all(dir.join("a")).unwrap();
        fs::write(dir.join("a/theme.conf"), "[theme]\n").unwrap();
        fs::create_dir_all(dir.join("b")).unwrap();
        fs::write(dir.join("c"), "a file, not a directory").unwrap();
        ThemeCatalog::new(dir)
    }

    #[test]
    fn test_lists_only_directories_with_marker() {
        let temp = TempDir::new().unwrap();
        assert_eq!(catalog(&temp).list_themes(), vec!["a".to_string()]);
    }

    #[test]
    fn test_sorted_ascending() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog(&temp);
        for name in ["zulu", "Alpha", "mike"] {
            let dir = catalog.directory().join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(THEME_MARKER), "").unwrap();
        }

        assert_eq!(catalog.list_themes(), vec!["Alpha", "a", "mike", "zulu"]);
    }

    #[test]
    fn test_marker_must_be_a_file() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog(&temp);
        fs::create_dir_all(catalog.directory().join("b").join(THEME_MARKER)).unwrap();

        assert_eq!(catalog.list_themes(), vec!["a"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let temp = TempDir::new().unwrap();
        let catalog = ThemeCatalog::new(temp.path().join("absent"));
        assert!(catalog.list_themes().is_empty());
    }

    #[test]
    fn test_not_cached() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog(&temp);
        assert_eq!(catalog.list_themes(), vec!["a"]);

        fs::write(catalog.directory().join("b").join(THEME_MARKER), "").unwrap();
        assert_eq!(catalog.list_themes(), vec!["a", "b"]);

        fs::remove_file(catalog.directory().join("a").join(THEME_MARKER)).unwrap();
        assert_eq!(catalog.list_themes(), vec!["b"]);
    }

    #[test]
    fn test_theme_path() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog(&temp);

        assert_eq!(catalog.theme_path("a"), Some(catalog.directory().join("a")));
        assert!(catalog.contains("a"));
        assert!(!catalog.contains("b"));
        assert!(!catalog.contains("c"));
        assert!(!catalog.contains("../themes/a"));
        assert!(!catalog.contains(""));
    }

    #[test]
    fn test_for_app_dir() {
        let catalog = ThemeCatalog::for_app_dir(Path::new("/home/zac/.taxidi"));
        assert_eq!(
            catalog.directory(),
            Path::new("/home/zac/.taxidi/resources/themes")
        );
    }
}
