//! Per-core gem combinations.

use crate::gem::{GemCounts, GemType};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A selection of gems placed into one core.
///
/// `will` and `points` are always the totals of `counts`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Combo {
    /// Gems used, per type.
    pub counts: GemCounts,
    /// Total will cost.
    pub will: u32,
    /// Total (uncapped) points.
    pub points: u32,
}

impl Combo {
    /// The empty combo.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a combo from usage counts.
    pub fn from_counts(counts: GemCounts) -> Self {
        Self {
            counts,
            will: counts.will(),
            points: counts.points(),
        }
    }

    /// Number of gems in the combo.
    pub fn gem_count(&self) -> usize {
        self.counts.total()
    }

    /// Returns true if the combo holds no gem.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Gems of the combo in catalog order.
    pub fn gems(&self) -> Vec<GemType> {
        self.counts.gems()
    }

    /// Points after applying a cap.
    #[inline]
    pub fn capped_points(&self, cap: u32) -> u32 {
        self.points.min(cap)
    }
}

impl FromIterator<GemType> for Combo {
    fn from_iter<I: IntoIterator<Item = GemType>>(iter: I) -> Self {
        Combo::from_counts(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_totals() {
        let combo: Combo = [GemType::D, GemType::A, GemType::A].into_iter().collect();
        assert_eq!(combo.will, 4 + 3 + 3);
        assert_eq!(combo.points, 15);
        assert_eq!(combo.gem_count(), 3);
        assert_eq!(combo.gems(), vec![GemType::A, GemType::A, GemType::D]);
    }

    #[test]
    fn test_empty_combo() {
        let combo = Combo::empty();
        assert!(combo.is_empty());
        assert_eq!(combo.will, 0);
        assert_eq!(combo.points, 0);
        assert!(combo.gems().is_empty());
    }

    #[test]
    fn test_capped_points() {
        let combo: Combo = [GemType::A; 4].into_iter().collect();
        assert_eq!(combo.points, 20);
        assert_eq!(combo.capped_points(14), 14);
        assert_eq!(combo.capped_points(20), 20);
        assert_eq!(combo.capped_points(0), 0);
    }
}
