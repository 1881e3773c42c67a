//! Configuration document access
//!
//! A [`ConfigDocument`] is the in-memory `section -> key -> value` view of the
//! resolved `config.ini`. Parsing and serialization are delegated to
//! `rust-ini`; the document is written back to the same file it was loaded
//! from.
//!
//! Values are literal: backslashes and quotes are neither interpreted on load
//! nor escaped on write, so Windows paths survive a round trip.

use std::io;
use std::path::{Path, PathBuf};

use ini::{EscapePolicy, Ini, ParseOption, WriteOption};
use tempfile::NamedTempFile;

use crate::coerce::parse_bool;
use crate::error::{
    Result,
    config::{missing_key, parse_failed, read_failed, write_failed},
};

/// Mutable configuration loaded from exactly one file
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    path: PathBuf,
    ini: Ini,
}

impl ConfigDocument {
    /// Load and parse the configuration at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "reading configuration");

        let ini = Ini::load_from_file_opt(path, parse_option()).map_err(|e| match e {
            ini::Error::Io(err) if err.kind() == io::ErrorKind::InvalidData => {
                parse_failed(path.display().to_string(), err.to_string())
            }
            ini::Error::Io(err) => read_failed(path.display().to_string(), err.to_string()),
            ini::Error::Parse(err) => parse_failed(path.display().to_string(), err.to_string()),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            ini,
        })
    }

    /// File the document was loaded from and is written back to
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.ini.get_from(Some(section), key)
    }

    /// Read a value through strict boolean coercion
    pub fn get_bool(&self, section: &str, key: &str) -> Result<bool> {
        let value = self
            .get(section, key)
            .ok_or_else(|| missing_key(section, key))?;
        parse_bool(value)
    }

    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    pub fn set_bool(&mut self, section: &str, key: &str, value: bool) {
        self.set(section, key, if value { "true" } else { "false" });
    }

    /// Remove a key, returning its previous value
    pub fn remove(&mut self, section: &str, key: &str) -> Option<String> {
        self.ini.delete_from(Some(section), key)
    }

    /// Named sections in file order
    pub fn sections(&self) -> Vec<&str> {
        self.ini.sections().flatten().collect()
    }

    /// Key/value pairs of one section in file order
    pub fn entries(&self, section: &str) -> Vec<(&str, &str)> {
        self.ini
            .section(Some(section))
            .map(|props| props.iter().collect())
            .unwrap_or_default()
    }

    /// Commit the document to its originating file.
    ///
    /// The content is staged in a temporary file beside the target and renamed
    /// over it, so a failed write leaves the previous file intact. The target's
    /// permissions are carried over and a symlinked config is written through
    /// to the file it points at. Comments in the original file are not kept.
    pub fn write(&self) -> Result<()> {
        let shown = self.path.display().to_string();
        let target = dunce::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let dir = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut staged =
            NamedTempFile::new_in(dir).map_err(|e| write_failed(&shown, e.to_string()))?;
        self.ini
            .write_to_opt(staged.as_file_mut(), write_option())
            .map_err(|e| write_failed(&shown, e.to_string()))?;
        if let Ok(metadata) = std::fs::metadata(&target) {
            staged
                .as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| write_failed(&shown, e.to_string()))?;
        }
        staged
            .persist(&target)
            .map_err(|e| write_failed(&shown, e.error.to_string()))?;

        tracing::debug!(path = %shown, "wrote configuration");
        Ok(())
    }
}

fn parse_option() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

fn write_option() -> WriteOption {
    WriteOption {
        escape_policy: EscapePolicy::Nothing,
        kv_separator: " = ",
        ..WriteOption::default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
[database]
driver = sqlite
username = admin

[interface]
fullscreen = False
theme = default

[report]
email = office@example.org
";

    fn sample(temp: &TempDir) -> PathBuf {
        let path = temp.path().join("config.ini");
        fs::write(&path, SAMPLE).unwrap();
        path
    }

    #[test]
    fn test_load_and_get() {
        let temp = TempDir::new().unwrap();
        let doc = ConfigDocument::load(sample(&temp)).unwrap();

        assert_eq!(doc.get("database", "driver"), Some("sqlite"));
        assert_eq!(doc.get("report", "email"), Some("office@example.org"));
        assert_eq!(doc.get("database", "missing"), None);
        assert_eq!(doc.get("nope", "driver"), None);
        assert_eq!(doc.sections(), vec!["database", "interface", "report"]);
    }

    #[test]
    fn test_round_trip_changes_only_mutated_key() {
        let temp = TempDir::new().unwrap();
        let path = sample(&temp);
        let original = ConfigDocument::load(&path).unwrap();

        let mut doc = original.clone();
        doc.set("database", "username", "foo");
        doc.write().unwrap();

        let reloaded = ConfigDocument::load(&path).unwrap();
        assert_eq!(reloaded.get("database", "username"), Some("foo"));
        for section in original.sections() {
            for (key, value) in original.entries(section) {
                if (section, key) != ("database", "username") {
                    assert_eq!(reloaded.get(section, key), Some(value), "[{section}] {key}");
                }
            }
        }
        assert_eq!(reloaded.sections(), original.sections());
    }

    #[test]
    fn test_set_creates_section() {
        let temp = TempDir::new().unwrap();
        let path = sample(&temp);
        let mut doc = ConfigDocument::load(&path).unwrap();

        doc.set_bool("kiosk", "enabled", true);
        doc.write().unwrap();

        let reloaded = ConfigDocument::load(&path).unwrap();
        assert!(reloaded.get_bool("kiosk", "enabled").unwrap());
    }

    #[test]
    fn test_get_bool() {
        let temp = TempDir::new().unwrap();
        let doc = ConfigDocument::load(sample(&temp)).unwrap();

        assert!(!doc.get_bool("interface", "fullscreen").unwrap());
        assert!(matches!(
            doc.get_bool("interface", "theme"),
            Err(ConfigError::InvalidBoolean { .. })
        ));
        assert!(matches!(
            doc.get_bool("interface", "absent"),
            Err(ConfigError::MissingKey { .. })
        ));
    }

    #[test]
    fn test_remove() {
        let temp = TempDir::new().unwrap();
        let mut doc = ConfigDocument::load(sample(&temp)).unwrap();

        assert_eq!(doc.remove("database", "username"), Some("admin".to_string()));
        assert_eq!(doc.get("database", "username"), None);
        assert_eq!(doc.remove("database", "username"), None);
    }

    #[test]
    fn test_malformed_input_is_parse_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        fs::write(&path, "driver = sqlite\n[database").unwrap();

        let err = ConfigDocument::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailure { .. }));
    }

    #[test]
    fn test_values_are_literal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        fs::write(
            &path,
            "[paths]\nnametag = C:\\Taxidi\\new\n\n[report]\nsubject = \"Weekly\" report\n",
        )
        .unwrap();

        let mut doc = ConfigDocument::load(&path).unwrap();
        assert_eq!(doc.get("paths", "nametag"), Some("C:\\Taxidi\\new"));
        assert_eq!(doc.get("report", "subject"), Some("\"Weekly\" report"));

        doc.set("paths", "themes", "D:\\share\\themes");
        doc.write().unwrap();

        let reloaded = ConfigDocument::load(&path).unwrap();
        assert_eq!(reloaded.get("paths", "nametag"), Some("C:\\Taxidi\\new"));
        assert_eq!(reloaded.get("paths", "themes"), Some("D:\\share\\themes"));
        assert_eq!(reloaded.get("report", "subject"), Some("\"Weekly\" report"));
    }

    #[test]
    fn test_invalid_utf8_is_parse_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        fs::write(&path, b"[a]\nk = \xff\xfe\n").unwrap();

        let err = ConfigDocument::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailure { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = sample(&temp);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let mut doc = ConfigDocument::load(&path).unwrap();
        doc.set("database", "username", "foo");
        doc.write().unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_through_symlink() {
        let temp = TempDir::new().unwrap();
        let real = sample(&temp);
        let link = temp.path().join("linked.ini");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let mut doc = ConfigDocument::load(&link).unwrap();
        doc.set("database", "username", "foo");
        doc.write().unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        let reloaded = ConfigDocument::load(&real).unwrap();
        assert_eq!(reloaded.get("database", "username"), Some("foo"));
    }

    #[test]
    fn test_missing_file_is_read_failure() {
        let temp = TempDir::new().unwrap();

        let err = ConfigDocument::load(temp.path().join("absent.ini")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFailure { .. }));
    }

    #[test]
    fn test_write_failure() {
        let temp = TempDir::new().unwrap();
        let path = sample(&temp);
        let mut doc = ConfigDocument::load(&path).unwrap();
        doc.path = temp.path().join("gone/config.ini");

        let err = doc.write().unwrap_err();
        assert!(matches!(err, ConfigError::WriteFailure { .. }));
    }
}
