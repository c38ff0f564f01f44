use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::export::ExportFormat;

const APP_DIR: &str = "msp-theme";
const LOCAL_DIR: &str = ".msp-theme";
const CONFIG_FILE: &str = "config.toml";

/// Preview width used when no config sets one
pub const DEFAULT_PREVIEW_WIDTH: u16 = 48;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportConfig {
    /// Format used by `export` when `--format` is not given
    pub format: Option<ExportFormat>,
    /// File written by `export` when `--output` is not given
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewConfig {
    /// Width of the preview box in terminal cells
    pub width: Option<u16>,
}

/// Settings for the `msp-theme` tool. Theme values are not configurable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl Config {
    /// Merge two configs, with `other` taking precedence
    pub fn merge(self, other: Config) -> Config {
        Config {
            export: ExportConfig {
                format: other.export.format.or(self.export.format),
                output: other.export.output.or(self.export.output),
            },
            preview: PreviewConfig {
                width: other.preview.width.or(self.preview.width),
            },
        }
    }

    /// Make a relative `export.output` relative to `base_dir` instead of the
    /// working directory
    pub fn resolve_paths(mut self, base_dir: &Path) -> Config {
        if let Some(output) = self.export.output.as_mut() {
            if output.is_relative() && !is_stdout(output) {
                *output = base_dir.join(&*output);
            }
        }
        self
    }

    /// Get the export format, defaulting to QML
    pub fn export_format(&self) -> ExportFormat {
        self.export.format.unwrap_or_default()
    }

    /// Get the preview width, defaulting to [`DEFAULT_PREVIEW_WIDTH`]
    pub fn preview_width(&self) -> u16 {
        self.preview.width.unwrap_or(DEFAULT_PREVIEW_WIDTH)
    }
}

/// `-` as an output path means stdout
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Path of the global config: ~/.config/msp-theme/config.toml on Linux
pub fn global_config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Read a config file, resolving relative paths in it against `base_dir`
fn read_config(path: &Path, base_dir: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), base = %base_dir.display(), "loaded config");
    Ok(config.resolve_paths(base_dir))
}

/// Load global config from the given path, if it exists
fn load_global_config(path: Option<&Path>) -> Result<Option<Config>, ConfigError> {
    match path {
        Some(path) if path.exists() => {
            let base_dir = path.parent().unwrap_or(Path::new(""));
            read_config(path, base_dir).map(Some)
        }
        _ => Ok(None),
    }
}

/// Load local config from .msp-theme/config.toml in the start directory or parent directories
fn load_local_config(start_path: &Path) -> Result<Option<Config>, ConfigError> {
    let mut current = start_path.to_path_buf();

    loop {
        let config_path = current.join(LOCAL_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            // Paths are relative to the project root holding .msp-theme/
            return read_config(&config_path, &current).map(Some);
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

/// Load and merge configs (global + local) starting from `start_path`
pub fn load_config_from(
    global_path: Option<&Path>,
    start_path: &Path,
) -> Result<Config, ConfigError> {
    let global = load_global_config(global_path)?.unwrap_or_default();
    let local = load_local_config(start_path)?.unwrap_or_default();

    Ok(global.merge(local))
}

/// Load and merge configs (global + local) for the current directory
pub fn load_config() -> Result<Config, ConfigError> {
    let current_dir = std::env::current_dir()?;
    load_config_from(global_config_path().as_deref(), &current_dir)
}
