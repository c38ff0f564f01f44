use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Spacing scale in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spacing {
    pub xs: u32,
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
}

pub const SPACING: Spacing = Spacing {
    xs: 6,
    sm: 8,
    md: 12,
    lg: 16,
};

// The scale must stay positive and strictly increasing.
const _: () = assert!(SPACING.xs > 0 && SPACING.xs < SPACING.sm);
const _: () = assert!(SPACING.sm < SPACING.md && SPACING.md < SPACING.lg);

/// Key of an entry in [`Spacing`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpacingRole {
    Xs,
    Sm,
    Md,
    Lg,
}

impl SpacingRole {
    pub const ALL: [SpacingRole; 4] = [
        SpacingRole::Xs,
        SpacingRole::Sm,
        SpacingRole::Md,
        SpacingRole::Lg,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SpacingRole::Xs => "xs",
            SpacingRole::Sm => "sm",
            SpacingRole::Md => "md",
            SpacingRole::Lg => "lg",
        }
    }
}

impl fmt::Display for SpacingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpacingRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| Error::UnknownRole {
                table: Spacing::TABLE,
                name: s.to_string(),
            })
    }
}

impl Spacing {
    pub const TABLE: &'static str = "spacing";

    pub const fn get(&self, role: SpacingRole) -> u32 {
        match role {
            SpacingRole::Xs => self.xs,
            SpacingRole::Sm => self.sm,
            SpacingRole::Md => self.md,
            SpacingRole::Lg => self.lg,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpacingRole, u32)> + '_ {
        SpacingRole::ALL
            .into_iter()
            .map(move |role| (role, self.get(role)))
    }
}
