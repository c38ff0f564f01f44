//! Render the theme for other consumers
//!
//! - `toml` / `json`: `colors`, `fonts` and `spacing` tables with camelCase keys
//! - `qml`: the `Theme.js` module imported by the painter's QML files

use std::fmt::{self, Write as _};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::theme::Theme;

const QML_HEADER: &str = "// Simple theme constants for colors/fonts/spacing.";

/// Output format for [`render`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Toml,
    Json,
    #[default]
    Qml,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Toml, ExportFormat::Json, ExportFormat::Qml];

    pub const fn name(self) -> &'static str {
        match self {
            ExportFormat::Toml => "toml",
            ExportFormat::Json => "json",
            ExportFormat::Qml => "qml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.name() == lower)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

/// Render a theme in the given format
pub fn render(theme: &Theme, format: ExportFormat) -> Result<String> {
    let text = match format {
        ExportFormat::Toml => toml::to_string_pretty(theme)?,
        ExportFormat::Json => {
            let mut json = serde_json::to_string_pretty(theme)?;
            json.push('\n');
            json
        }
        ExportFormat::Qml => render_qml(theme)?,
    };
    Ok(text)
}

/// Render a theme and write it to `path`, creating parent directories
pub fn write_to(path: &Path, theme: &Theme, format: ExportFormat) -> Result<()> {
    let text = render(theme, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)?;

    tracing::info!(path = %path.display(), %format, "exported theme");
    Ok(())
}

fn render_qml(theme: &Theme) -> Result<String> {
    let colors = theme
        .colors
        .iter()
        .map(|(role, color)| -> Result<(&'static str, String)> {
            Ok((role.name(), serde_json::to_string(&color)?))
        })
        .collect::<Result<Vec<_>>>()?;
    let fonts = theme
        .fonts
        .iter()
        .map(|(role, family)| -> Result<(&'static str, String)> {
            Ok((role.name(), serde_json::to_string(family)?))
        })
        .collect::<Result<Vec<_>>>()?;
    let spacing: Vec<_> = theme
        .spacing
        .iter()
        .map(|(role, px)| (role.name(), px.to_string()))
        .collect();

    let blocks = [
        qml_var("colors", &colors),
        qml_var("fonts", &fonts),
        qml_var("spacing", &spacing),
    ];

    Ok(format!("{QML_HEADER}\n{}", blocks.join("\n")))
}

fn qml_var(name: &str, entries: &[(&str, String)]) -> String {
    let mut out = format!("var {name} = {{\n");
    for (i, (key, value)) in entries.iter().enumerate() {
        let sep = if i + 1 < entries.len() { "," } else { "" };
        // Writing to a String cannot fail.
        let _ = writeln!(out, "    {key}: {value}{sep}");
    }
    out.push_str("};\n");
    out
}
