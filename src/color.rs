//! Hex color value used by every color token
//!
//! Colors are stored as 24-bit RGB and always rendered as lowercase `#rrggbb`.
//! Table literals go through [`HexColor::from_hex`], which runs at compile time,
//! so a malformed literal fails the build instead of producing a bad color.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors produced when parsing a color string at runtime
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#'")]
    MissingHash,

    #[error("expected 3 or 6 hex digits, found {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit '{0}'")]
    InvalidDigit(char),
}

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value. The high byte is ignored.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Parse a `#rrggbb` literal in const context.
    ///
    /// Panics on anything else, which turns into a compile error when used to
    /// initialize a `const`.
    pub const fn from_hex(s: &str) -> Self {
        let bytes = s.as_bytes();
        assert!(bytes.len() == 7, "hex color literal must be #rrggbb");
        assert!(bytes[0] == b'#', "hex color literal must start with '#'");

        Self {
            r: (const_hex_digit(bytes[1]) << 4) | const_hex_digit(bytes[2]),
            g: (const_hex_digit(bytes[3]) << 4) | const_hex_digit(bytes[4]),
            b: (const_hex_digit(bytes[5]) << 4) | const_hex_digit(bytes[6]),
        }
    }

    /// Parse a color string at runtime
    ///
    /// Supports:
    /// - Hex colors: "#RRGGBB" or "#RGB"
    /// - Either case, surrounding whitespace ignored
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        s.parse()
    }

    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn components(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Relative luminance as defined by WCAG 2.x (sRGB, 0.0 to 1.0)
    pub fn relative_luminance(self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// WCAG contrast ratio between two colors (1.0 to 21.0)
    pub fn contrast_ratio(self, other: HexColor) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }
}

const fn const_hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => panic!("invalid hex digit in color literal"),
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or(ColorParseError::MissingHash)?;

        let digits = hex
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ColorParseError::InvalidDigit(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match digits.as_slice() {
            // #RGB -> #RRGGBB
            [r, g, b] => Ok(Self::rgb(r * 0x11, g * 0x11, b * 0x11)),
            [r1, r2, g1, g2, b1, b2] => {
                Ok(Self::rgb((r1 << 4) | r2, (g1 << 4) | g2, (b1 << 4) | b2))
            }
            other => Err(ColorParseError::InvalidLength(other.len())),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<HexColor> for Color {
    fn from(color: HexColor) -> Self {
        Color::Rgb(color.r, color.g, color.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
