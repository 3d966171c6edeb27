use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;
use thiserror::Error;

/// Donor/acceptor roles a residue pair may take in a hydrogen bond.
///
/// The four facets are independent: `backbone1`/`sidechain1` say which part of
/// the first residue may take part, `backbone2`/`sidechain2` the same for the
/// second. As a request they restrict the search; as a result they describe the
/// combination that matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoleFlags {
    pub backbone1: bool,
    pub backbone2: bool,
    pub sidechain1: bool,
    pub sidechain2: bool,
}

impl RoleFlags {
    pub const NONE: Self = Self::new(false, false, false, false);
    pub const BACK1: Self = Self::new(true, false, false, false);
    pub const BACK2: Self = Self::new(false, true, false, false);
    pub const SIDE1: Self = Self::new(false, false, true, false);
    pub const SIDE2: Self = Self::new(false, false, false, true);

    pub const BB: Self = Self::new(true, true, false, false);
    pub const BS: Self = Self::new(true, false, false, true);
    pub const SS: Self = Self::new(false, false, true, true);
    pub const SB: Self = Self::new(false, true, true, false);
    /// First residue's sidechain against any part of the second.
    pub const SIDECHAIN: Self = Self::new(false, true, true, true);
    /// First residue's backbone against any part of the second.
    pub const BACKBONE: Self = Self::new(true, true, false, true);
    pub const ANY: Self = Self::new(true, true, true, true);

    pub const fn new(backbone1: bool, backbone2: bool, sidechain1: bool, sidechain2: bool) -> Self {
        Self {
            backbone1,
            backbone2,
            sidechain1,
            sidechain2,
        }
    }

    pub const fn is_empty(self) -> bool {
        !(self.backbone1 || self.backbone2 || self.sidechain1 || self.sidechain2)
    }

    /// True if every facet set in `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        (self.backbone1 || !other.backbone1)
            && (self.backbone2 || !other.backbone2)
            && (self.sidechain1 || !other.sidechain1)
            && (self.sidechain2 || !other.sidechain2)
    }

    fn facet_names(self) -> impl Iterator<Item = &'static str> {
        [
            (self.backbone1, "back1"),
            (self.backbone2, "back2"),
            (self.sidechain1, "side1"),
            (self.sidechain2, "side2"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
    }
}

impl BitOr for RoleFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            backbone1: self.backbone1 || rhs.backbone1,
            backbone2: self.backbone2 || rhs.backbone2,
            sidechain1: self.sidechain1 || rhs.sidechain1,
            sidechain2: self.sidechain2 || rhs.sidechain2,
        }
    }
}

impl BitOrAssign for RoleFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

const PRESETS: [(&str, RoleFlags); 8] = [
    ("none", RoleFlags::NONE),
    ("bb", RoleFlags::BB),
    ("bs", RoleFlags::BS),
    ("ss", RoleFlags::SS),
    ("sb", RoleFlags::SB),
    ("sidechain", RoleFlags::SIDECHAIN),
    ("backbone", RoleFlags::BACKBONE),
    ("any", RoleFlags::ANY),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "Invalid role specification '{0}': expected bb, bs, ss, sb, sidechain, backbone, any, or a '+'-joined list of back1, back2, side1, side2"
)]
pub struct ParseRoleFlagsError(pub String);

impl FromStr for RoleFlags {
    type Err = ParseRoleFlagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if let Some((_, flags)) = PRESETS.iter().find(|(name, _)| *name == normalized) {
            return Ok(*flags);
        }

        normalized
            .split('+')
            .map(|part| match part.trim() {
                "back1" => Ok(RoleFlags::BACK1),
                "back2" => Ok(RoleFlags::BACK2),
                "side1" => Ok(RoleFlags::SIDE1),
                "side2" => Ok(RoleFlags::SIDE2),
                _ => Err(ParseRoleFlagsError(s.to_string())),
            })
            .try_fold(RoleFlags::NONE, |acc, facet| Ok(acc | facet?))
    }
}

impl fmt::Display for RoleFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some((name, _)) = PRESETS.iter().find(|(_, flags)| flags == self) {
            return f.write_str(name);
        }
        let names: Vec<_> = self.facet_names().collect();
        f.write_str(&names.join("+"))
    }
}

impl Serialize for RoleFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RoleFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
