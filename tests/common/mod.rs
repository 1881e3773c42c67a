//! Common test utilities for taxidi-conf integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const TEMPLATE: &str = "\
[database]
driver = sqlite
username = admin

[interface]
fullscreen = False
theme = default

[report]
email = office@example.org
";

/// A fake installation: a working directory, a home directory and a share
/// directory holding the template and shipped resources
pub struct TestEnv {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub cwd: PathBuf,
    pub home: PathBuf,
    pub share: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let cwd = temp.path().join("work");
        let home = temp.path().join("home");
        let share = temp.path().join("share");
        for dir in [&cwd, &home, &share] {
            std::fs::create_dir_all(dir).expect("Failed to create directory");
        }

        let env = Self {
            temp,
            cwd,
            home,
            share,
        };
        env.write_share("config.ini.template", TEMPLATE);
        env.write_share("resources/nametag/default.html", "<html></html>\n");
        env.write_share("resources/themes/default/theme.conf", "[theme]\n");
        env
    }

    /// `<home>/.taxidi`
    pub fn app_dir(&self) -> PathBuf {
        self.home.join(".taxidi")
    }

    pub fn write_share(&self, path: &str, content: &str) {
        write(&self.share.join(path), content);
    }

    pub fn write_cwd(&self, path: &str, content: &str) {
        write(&self.cwd.join(path), content);
    }

    pub fn write_app(&self, path: &str, content: &str) {
        write(&self.app_dir().join(path), content);
    }

    pub fn read_app(&self, path: &str) -> String {
        std::fs::read_to_string(self.app_dir().join(path)).expect("Failed to read file")
    }

    /// Command with an isolated environment
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("taxidi-conf").expect("binary exists");
        cmd.current_dir(&self.cwd)
            .env("HOME", &self.home)
            .env("TAXIDI_SHARE_DIR", &self.share)
            .env_remove("USERPROFILE")
            .env_remove("TAXIDI_LOG");
        cmd
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
