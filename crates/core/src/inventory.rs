//! Gem inventory and its search-ready sorted form.

use crate::gem::{GemCounts, GemType, GEM_TYPE_COUNT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::collections::BTreeMap;

/// Owned gems, grouped by type.
///
/// Each entry of a type's sequence is one physical gem, holding its
/// side-point value (nominally 0..=20). Sequence order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "BTreeMap<GemType, Vec<u32>>",
        into = "BTreeMap<GemType, Vec<u32>>"
    )
)]
pub struct Inventory {
    side_points: [Vec<u32>; GEM_TYPE_COUNT],
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds gems of a type with the given side-point values.
    pub fn with_gems(mut self, gem: GemType, side_points: impl IntoIterator<Item = u32>) -> Self {
        self.side_points[gem.index()].extend(side_points);
        self
    }

    /// Adds a single gem.
    pub fn add_gem(&mut self, gem: GemType, side_points: u32) {
        self.side_points[gem.index()].push(side_points);
    }

    /// Replaces all gems of a type.
    pub fn set_gems(&mut self, gem: GemType, side_points: Vec<u32>) {
        self.side_points[gem.index()] = side_points;
    }

    /// Side-point values of the gems of a type.
    pub fn side_points(&self, gem: GemType) -> &[u32] {
        &self.side_points[gem.index()]
    }

    /// Number of owned gems of a type.
    #[inline]
    pub fn count(&self, gem: GemType) -> usize {
        self.side_points[gem.index()].len()
    }

    /// Total number of owned gems.
    pub fn total_gems(&self) -> usize {
        self.side_points.iter().map(Vec::len).sum()
    }

    /// Returns true if no gem is owned.
    pub fn is_empty(&self) -> bool {
        self.side_points.iter().all(Vec::is_empty)
    }

    /// Returns true if `usage` can be drawn from this inventory.
    pub fn fits(&self, usage: &GemCounts) -> bool {
        GemType::ALL.iter().all(|&gem| usage.get(gem) <= self.count(gem))
    }

    /// Per-type counts of gems not consumed by `usage`.
    pub fn remaining(&self, usage: &GemCounts) -> Vec<(GemType, usize)> {
        GemType::ALL
            .iter()
            .map(|&gem| (gem, self.count(gem).saturating_sub(usage.get(gem))))
            .filter(|&(_, left)| left > 0)
            .collect()
    }

    /// Builds the descending-sorted copy used by the search.
    pub fn sorted(&self) -> SortedInventory {
        SortedInventory::new(self)
    }
}

#[cfg(feature = "serde")]
impl From<BTreeMap<GemType, Vec<u32>>> for Inventory {
    fn from(map: BTreeMap<GemType, Vec<u32>>) -> Self {
        let mut inventory = Inventory::new();
        for (gem, side_points) in map {
            inventory.set_gems(gem, side_points);
        }
        inventory
    }
}

#[cfg(feature = "serde")]
impl From<Inventory> for BTreeMap<GemType, Vec<u32>> {
    fn from(inventory: Inventory) -> Self {
        GemType::ALL
            .iter()
            .copied()
            .zip(inventory.side_points)
            .collect()
    }
}

/// Inventory with each type's side points sorted descending.
///
/// Keeps per-type prefix sums so the side-node bonus of any usage vector
/// is a constant-time lookup per type.
#[derive(Debug, Clone)]
pub struct SortedInventory {
    counts: [usize; GEM_TYPE_COUNT],
    sorted: [Vec<u32>; GEM_TYPE_COUNT],
    /// `prefix[t][k]` is the sum of the `k` highest side points of type `t`.
    prefix: [Vec<u64>; GEM_TYPE_COUNT],
}

impl SortedInventory {
    /// Sorts a copy of `inventory`; the input is left untouched.
    pub fn new(inventory: &Inventory) -> Self {
        let sorted: [Vec<u32>; GEM_TYPE_COUNT] = std::array::from_fn(|i| {
            let mut values = inventory.side_points[i].clone();
            values.sort_unstable_by(|a, b| b.cmp(a));
            values
        });
        let prefix = std::array::from_fn(|i| {
            let mut sums = Vec::with_capacity(sorted[i].len() + 1);
            let mut acc = 0u64;
            sums.push(acc);
            for &v in &sorted[i] {
                acc += u64::from(v);
                sums.push(acc);
            }
            sums
        });
        let counts = std::array::from_fn(|i| sorted[i].len());

        Self {
            counts,
            sorted,
            prefix,
        }
    }

    /// Number of owned gems of a type.
    #[inline]
    pub fn count(&self, gem: GemType) -> usize {
        self.counts[gem.index()]
    }

    /// Side points of a type, highest first.
    pub fn side_points(&self, gem: GemType) -> &[u32] {
        &self.sorted[gem.index()]
    }

    /// Returns true if `usage` can be drawn from the inventory.
    #[inline]
    pub fn fits(&self, usage: &GemCounts) -> bool {
        GemType::ALL
            .iter()
            .all(|&gem| usage.get(gem) <= self.counts[gem.index()])
    }

    /// Side-node bonus of a feasible usage vector.
    ///
    /// For every type the highest-valued gems are taken first, regardless of
    /// which core consumes them.
    #[inline]
    pub fn side_nodes(&self, usage: &GemCounts) -> u64 {
        usage
            .iter()
            .map(|(gem, used)| self.prefix[gem.index()][used])
            .sum()
    }
}
