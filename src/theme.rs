//! Theme bundle for the MSP painter
//!
//! A [`Theme`] groups the three token tables. There is exactly one theme and it
//! never changes: [`THEME`] is a `const` and [`Theme::current`] hands out a
//! `'static` reference to the same values.

use std::fmt;

use serde::Serialize;

use crate::color::HexColor;
use crate::error::{Error, Result};
use crate::tokens::{
    ColorRole, Colors, FontRole, Fonts, Spacing, SpacingRole, COLORS, FONTS, SPACING,
};

/// Complete theme containing colors, fonts and spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub colors: Colors,
    pub fonts: Fonts,
    pub spacing: Spacing,
}

pub const THEME: Theme = Theme {
    colors: COLORS,
    fonts: FONTS,
    spacing: SPACING,
};

static CURRENT: Theme = THEME;

/// A single resolved token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenValue {
    Color(HexColor),
    Font(&'static str),
    Spacing(u32),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Color(color) => write!(f, "{color}"),
            TokenValue::Font(family) => f.write_str(family),
            TokenValue::Spacing(px) => write!(f, "{px}"),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        THEME
    }
}

impl Theme {
    /// The theme shared by the whole process
    pub fn current() -> &'static Theme {
        &CURRENT
    }

    /// Resolve a dotted `table.key` path, e.g. `colors.panelBorder`
    pub fn lookup(&self, path: &str) -> Result<TokenValue> {
        let (table, key) = path
            .split_once('.')
            .filter(|(table, key)| !table.is_empty() && !key.is_empty())
            .ok_or_else(|| Error::InvalidPath(path.to_string()))?;

        match table {
            Colors::TABLE => {
                let role: ColorRole = key.parse()?;
                Ok(TokenValue::Color(self.colors.get(role)))
            }
            Fonts::TABLE => {
                let role: FontRole = key.parse()?;
                Ok(TokenValue::Font(self.fonts.get(role)))
            }
            Spacing::TABLE => {
                let role: SpacingRole = key.parse()?;
                Ok(TokenValue::Spacing(self.spacing.get(role)))
            }
            other => Err(Error::UnknownTable(other.to_string())),
        }
    }

    /// Every token as `(path, value)` in table then declaration order
    pub fn tokens(&self) -> Vec<(String, TokenValue)> {
        let mut tokens = Vec::new();
        for (role, color) in self.colors.iter() {
            tokens.push((token_path(Colors::TABLE, role), TokenValue::Color(color)));
        }
        for (role, family) in self.fonts.iter() {
            tokens.push((token_path(Fonts::TABLE, role), TokenValue::Font(family)));
        }
        for (role, px) in self.spacing.iter() {
            tokens.push((token_path(Spacing::TABLE, role), TokenValue::Spacing(px)));
        }
        tokens
    }
}

fn token_path(table: &str, key: impl fmt::Display) -> String {
    format!("{table}.{key}")
}
