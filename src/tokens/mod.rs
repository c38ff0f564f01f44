//! Theme token tables
//!
//! Each table is a struct with one field per key, so the key set is closed and
//! a misspelled key is a compile error. The `*Role` enums name the same keys for
//! code that needs to iterate or look up by name.

mod colors;
mod fonts;
mod spacing;

pub use colors::{ColorRole, Colors, COLORS};
pub use fonts::{FontRole, Fonts, FONTS};
pub use spacing::{Spacing, SpacingRole, SPACING};
