use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::color::HexColor;
use crate::error::Error;

/// Semantic color roles used by the painter UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    // Surfaces
    pub background: HexColor,
    pub panel: HexColor,
    pub panel_border: HexColor,
    pub panel_border_strong: HexColor,

    // Text
    pub text_primary: HexColor,
    pub text_muted: HexColor,
    pub text_on_light: HexColor,

    // Layer list
    pub layer_active_border: HexColor,
    pub layer_inactive_border: HexColor,
}

pub const COLORS: Colors = Colors {
    background: HexColor::from_hex("#171819"),
    panel: HexColor::from_hex("#1f2125"),
    panel_border: HexColor::from_hex("#2f3238"),
    panel_border_strong: HexColor::from_hex("#2e333b"),
    text_primary: HexColor::from_hex("#ffffff"),
    text_muted: HexColor::from_hex("#cfd4db"),
    text_on_light: HexColor::from_hex("#111111"),
    layer_active_border: HexColor::from_hex("#4d88ff"),
    layer_inactive_border: HexColor::from_hex("#3a3f4a"),
};

/// Key of an entry in [`Colors`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    Panel,
    PanelBorder,
    PanelBorderStrong,
    TextPrimary,
    TextMuted,
    TextOnLight,
    LayerActiveBorder,
    LayerInactiveBorder,
}

impl ColorRole {
    pub const ALL: [ColorRole; 9] = [
        ColorRole::Background,
        ColorRole::Panel,
        ColorRole::PanelBorder,
        ColorRole::PanelBorderStrong,
        ColorRole::TextPrimary,
        ColorRole::TextMuted,
        ColorRole::TextOnLight,
        ColorRole::LayerActiveBorder,
        ColorRole::LayerInactiveBorder,
    ];

    /// Exported key name, as the QML layer spells it
    pub const fn name(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Panel => "panel",
            ColorRole::PanelBorder => "panelBorder",
            ColorRole::PanelBorderStrong => "panelBorderStrong",
            ColorRole::TextPrimary => "textPrimary",
            ColorRole::TextMuted => "textMuted",
            ColorRole::TextOnLight => "textOnLight",
            ColorRole::LayerActiveBorder => "layerActiveBorder",
            ColorRole::LayerInactiveBorder => "layerInactiveBorder",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| Error::UnknownRole {
                table: Colors::TABLE,
                name: s.to_string(),
            })
    }
}

impl Colors {
    pub const TABLE: &'static str = "colors";

    /// Get a color by role
    pub const fn get(&self, role: ColorRole) -> HexColor {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Panel => self.panel,
            ColorRole::PanelBorder => self.panel_border,
            ColorRole::PanelBorderStrong => self.panel_border_strong,
            ColorRole::TextPrimary => self.text_primary,
            ColorRole::TextMuted => self.text_muted,
            ColorRole::TextOnLight => self.text_on_light,
            ColorRole::LayerActiveBorder => self.layer_active_border,
            ColorRole::LayerInactiveBorder => self.layer_inactive_border,
        }
    }

    /// All entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, HexColor)> + '_ {
        ColorRole::ALL
            .into_iter()
            .map(move |role| (role, self.get(role)))
    }
}
