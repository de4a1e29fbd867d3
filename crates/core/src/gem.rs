//! Gem catalog and per-type usage counts.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of distinct gem types in the catalog.
pub const GEM_TYPE_COUNT: usize = 10;

/// Maximum number of gems a single core can hold.
pub const MAX_GEMS_PER_CORE: usize = 4;

/// Static attributes of a gem type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GemStats {
    /// Will (resource) cost charged against the core budget.
    pub will: u32,
    /// Points contributed to the core.
    pub points: u32,
}

const CATALOG: [GemStats; GEM_TYPE_COUNT] = [
    GemStats { will: 3, points: 5 },
    GemStats { will: 3, points: 4 },
    GemStats { will: 3, points: 3 },
    GemStats { will: 4, points: 5 },
    GemStats { will: 4, points: 4 },
    GemStats { will: 4, points: 3 },
    GemStats { will: 5, points: 5 },
    GemStats { will: 5, points: 4 },
    GemStats { will: 5, points: 3 },
    GemStats { will: 6, points: 5 },
];

/// Gem type identifier.
///
/// Declaration order is the catalog order, which is also the enumeration
/// order used by the combo generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GemType {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    K,
    L,
}

impl GemType {
    /// All gem types in catalog order.
    pub const ALL: [GemType; GEM_TYPE_COUNT] = [
        GemType::A,
        GemType::B,
        GemType::C,
        GemType::D,
        GemType::E,
        GemType::F,
        GemType::G,
        GemType::H,
        GemType::K,
        GemType::L,
    ];

    /// Returns the catalog index of this type.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the type at a catalog index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the catalog entry for this type.
    #[inline]
    pub const fn stats(self) -> GemStats {
        CATALOG[self as usize]
    }

    /// Will cost of one gem of this type.
    #[inline]
    pub const fn will(self) -> u32 {
        CATALOG[self as usize].will
    }

    /// Point value of one gem of this type.
    #[inline]
    pub const fn points(self) -> u32 {
        CATALOG[self as usize].points
    }

    /// Single-letter label of this type.
    pub const fn letter(self) -> char {
        match self {
            GemType::A => 'A',
            GemType::B => 'B',
            GemType::C => 'C',
            GemType::D => 'D',
            GemType::E => 'E',
            GemType::F => 'F',
            GemType::G => 'G',
            GemType::H => 'H',
            GemType::K => 'K',
            GemType::L => 'L',
        }
    }
}

impl fmt::Display for GemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for GemType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_uppercase(),
            _ => return Err(Error::InvalidGemType(s.to_string())),
        };
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.letter() == letter)
            .ok_or_else(|| Error::InvalidGemType(s.to_string()))
    }
}

/// Number of gems used per type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GemCounts([u16; GEM_TYPE_COUNT]);

impl GemCounts {
    /// Creates empty counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the count for a type.
    #[inline]
    pub fn get(&self, gem: GemType) -> usize {
        self.0[gem.index()] as usize
    }

    /// Adds one gem of the given type.
    #[inline]
    pub fn increment(&mut self, gem: GemType) {
        self.0[gem.index()] += 1;
    }

    /// Removes one gem of the given type.
    #[inline]
    pub fn decrement(&mut self, gem: GemType) {
        self.0[gem.index()] -= 1;
    }

    /// Element-wise sum of two count vectors.
    #[inline]
    pub fn merged(&self, other: &GemCounts) -> GemCounts {
        let mut out = *self;
        for (slot, add) in out.0.iter_mut().zip(other.0.iter()) {
            *slot += add;
        }
        out
    }

    /// Total number of gems.
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    /// Returns true if no gem is counted.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Total will cost of the counted gems.
    pub fn will(&self) -> u32 {
        self.iter().map(|(gem, n)| gem.will() * n as u32).sum()
    }

    /// Total points of the counted gems.
    pub fn points(&self) -> u32 {
        self.iter().map(|(gem, n)| gem.points() * n as u32).sum()
    }

    /// Iterates over types with a non-zero count, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (GemType, usize)> + '_ {
        GemType::ALL
            .iter()
            .copied()
            .zip(self.0.iter())
            .filter(|(_, &n)| n > 0)
            .map(|(gem, &n)| (gem, n as usize))
    }

    /// Expands the counts into a gem list in catalog order.
    pub fn gems(&self) -> Vec<GemType> {
        self.iter()
            .flat_map(|(gem, n)| std::iter::repeat(gem).take(n))
            .collect()
    }
}

impl FromIterator<GemType> for GemCounts {
    fn from_iter<I: IntoIterator<Item = GemType>>(iter: I) -> Self {
        let mut counts = GemCounts::new();
        for gem in iter {
            counts.increment(gem);
        }
        counts
    }
}
