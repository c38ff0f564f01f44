use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Font families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fonts {
    /// UI text
    pub sans: &'static str,
    /// Numbers, coordinates and other tabular values
    pub mono: &'static str,
}

pub const FONTS: Fonts = Fonts {
    sans: "Fira Sans",
    mono: "Fira Mono",
};

const _: () = assert!(!FONTS.sans.is_empty() && !FONTS.mono.is_empty());

/// Key of an entry in [`Fonts`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Sans,
    Mono,
}

impl FontRole {
    pub const ALL: [FontRole; 2] = [FontRole::Sans, FontRole::Mono];

    pub const fn name(self) -> &'static str {
        match self {
            FontRole::Sans => "sans",
            FontRole::Mono => "mono",
        }
    }
}

impl fmt::Display for FontRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| Error::UnknownRole {
                table: Fonts::TABLE,
                name: s.to_string(),
            })
    }
}

impl Fonts {
    pub const TABLE: &'static str = "fonts";

    pub const fn get(&self, role: FontRole) -> &'static str {
        match role {
            FontRole::Sans => self.sans,
            FontRole::Mono => self.mono,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FontRole, &'static str)> + '_ {
        FontRole::ALL
            .into_iter()
            .map(move |role| (role, self.get(role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names_round_trip() {
        for role in FontRole::ALL {
            assert_eq!(role.name().parse::<FontRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role() {
        assert!(matches!(
            "serif".parse::<FontRole>(),
            Err(Error::UnknownRole { table: "fonts", .. })
        ));
    }

    #[test]
    fn test_get() {
        assert_eq!(FONTS.get(FontRole::Sans), "Fira Sans");
        assert_eq!(FONTS.get(FontRole::Mono), "Fira Mono");
    }
}
