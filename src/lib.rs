//! Theme constants for the MSP painter UI
//!
//! Three immutable tables: [`COLORS`], [`FONTS`] and [`SPACING`], bundled as
//! [`THEME`]. Everything else in the crate reads these tables: lookup by name,
//! export for the QML layer, and a terminal preview.

pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod preview;
pub mod theme;
pub mod tokens;

pub use color::{ColorParseError, HexColor};
pub use config::Config;
pub use error::{Error, Result};
pub use export::ExportFormat;
pub use theme::{Theme, TokenValue, THEME};
pub use tokens::{ColorRole, Colors, FontRole, Fonts, Spacing, SpacingRole, COLORS, FONTS, SPACING};
