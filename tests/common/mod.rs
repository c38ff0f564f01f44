//! Common test utilities

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated home + working directory for config and export tests
pub struct TestEnv {
    pub dir: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let home = dir.path().join("home");
        let work = dir.path().join("work");
        std::fs::create_dir_all(&home).unwrap();
        std::fs::create_dir_all(&work).unwrap();

        Self { dir, home, work }
    }

    /// Path of the global config inside the fake home
    pub fn global_config(&self) -> PathBuf {
        self.home.join(".config/msp-theme/config.toml")
    }

    /// Write the global config file
    pub fn write_global(&self, content: &str) -> PathBuf {
        let path = self.global_config();
        write_file(&path, content);
        path
    }

    /// Write `.msp-theme/config.toml` under `dir`
    pub fn write_local(&self, dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(".msp-theme").join("config.toml");
        write_file(&path, content);
        path
    }

    /// `msp-theme` binary running inside the work directory with the fake home
    pub fn cmd(&self) -> Command {
        self.cmd_in(&self.work)
    }

    /// Same as [`TestEnv::cmd`], started from `dir`
    pub fn cmd_in(&self, dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("msp-theme").expect("binary not built");
        cmd.current_dir(dir)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env_remove("MSP_THEME_LOG");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop ANSI escape sequences, keeping only the printed cells
pub fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // CSI sequences end with a letter
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

fn write_file(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// `Theme.js` as the painter's QML layer ships it
pub const THEME_JS: &str = r##"// Simple theme constants for colors/fonts/spacing.
var colors = {
    background: "#171819",
    panel: "#1f2125",
    panelBorder: "#2f3238",
    panelBorderStrong: "#2e333b",
    textPrimary: "#ffffff",
    textMuted: "#cfd4db",
    textOnLight: "#111111",
    layerActiveBorder: "#4d88ff",
    layerInactiveBorder: "#3a3f4a"
};

var fonts = {
    sans: "Fira Sans",
    mono: "Fira Mono"
};

var spacing = {
    xs: 6,
    sm: 8,
    md: 12,
    lg: 16
};
"##;
