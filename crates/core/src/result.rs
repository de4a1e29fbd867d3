//! Search result representation.

use crate::combo::Combo;
use crate::gem::{GemCounts, GemType};
use crate::grid::CORE_COUNT;
use crate::inventory::Inventory;
use crate::power::COMBAT_POWER_SCALE;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordering key of a candidate. Greater is better.
///
/// Higher power wins, then more capped points, then the triple found first
/// in enumeration order (lower indices).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankKey {
    /// Total power in hundredths.
    pub power_centi: u64,
    /// Sum of capped points over all cores.
    pub total_points: u32,
    /// Position of each combo in its core's candidate list.
    pub indices: [usize; CORE_COUNT],
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.power_centi
            .cmp(&other.power_centi)
            .then(self.total_points.cmp(&other.total_points))
            .then_with(|| other.indices.cmp(&self.indices))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A feasible assignment of one combo per core, with its score breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    /// Combo placed into each core.
    pub combos: [Combo; CORE_COUNT],
    /// Union usage of the three combos.
    pub usage: GemCounts,
    /// Capped points per core.
    pub points: [u32; CORE_COUNT],
    /// Will spent per core.
    pub will: [u32; CORE_COUNT],
    /// Side-node total of the used gems.
    pub side_nodes: u64,
    /// Sum of the per-core tier powers.
    pub core_power: u32,
    /// Order synergy bonus (0 when not granted).
    pub synergy_bonus: u32,
    /// Total power in hundredths.
    pub power_centi: u64,
    /// Position of each combo in its core's candidate list.
    pub indices: [usize; CORE_COUNT],
}

impl Candidate {
    /// Total power.
    pub fn power(&self) -> f64 {
        self.power_centi as f64 / 100.0
    }

    /// Sum of capped points over all cores.
    pub fn total_points(&self) -> u32 {
        self.points.iter().sum()
    }

    /// Sum of will spent over all cores.
    pub fn total_will(&self) -> u32 {
        self.will.iter().sum()
    }

    /// Power of the side nodes alone, in hundredths.
    pub fn side_node_power_centi(&self) -> u64 {
        self.power_centi - u64::from(self.core_power + self.synergy_bonus) * 100
    }

    /// Combat-power increase ratio: core power plus side-node power, scaled.
    ///
    /// The order synergy bonus is not part of it.
    pub fn combat_power_increase(&self) -> f64 {
        let centi = u64::from(self.core_power) * 100 + self.side_node_power_centi();
        centi as f64 / 100.0 / COMBAT_POWER_SCALE
    }

    /// Ranking key of this candidate.
    pub fn rank_key(&self) -> RankKey {
        RankKey {
            power_centi: self.power_centi,
            total_points: self.total_points(),
            indices: self.indices,
        }
    }

    /// Returns true if this candidate ranks strictly above `other`.
    pub fn outranks(&self, other: &Candidate) -> bool {
        self.rank_key() > other.rank_key()
    }

    /// Per-type counts of gems left unused in `inventory`.
    pub fn remaining(&self, inventory: &Inventory) -> Vec<(GemType, usize)> {
        inventory.remaining(&self.usage)
    }
}

/// Counters collected during a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    /// Combos enumerated per core before truncation.
    pub generated: [usize; CORE_COUNT],
    /// Combos kept per core after truncation and minimum filtering.
    pub kept: [usize; CORE_COUNT],
    /// Core-0 × core-1 pairs rejected by the inventory check.
    pub pairs_pruned: u64,
    /// Triples reaching the inventory check.
    pub triples_evaluated: u64,
    /// Triples that fit the inventory.
    pub feasible_triples: u64,
}

impl SearchStats {
    /// Adds the enumeration counters of `other` into `self`.
    pub fn merge(&mut self, other: &SearchStats) {
        self.pairs_pruned += other.pairs_pruned;
        self.triples_evaluated += other.triples_evaluated;
        self.feasible_triples += other.feasible_triples;
    }
}

/// Outcome of an optimization run.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptimizationResult {
    /// Best candidate, or `None` when no combination scores any point.
    pub best: Option<Candidate>,
    /// Search counters.
    pub stats: SearchStats,
    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl OptimizationResult {
    /// Creates a result. A best candidate with zero total points counts as
    /// no solution.
    pub fn new(best: Option<Candidate>, stats: SearchStats) -> Self {
        Self {
            best: best.filter(|c| c.total_points() > 0),
            stats,
            computation_time_ms: 0,
        }
    }

    /// Sets the computation time.
    pub fn with_computation_time(mut self, ms: u64) -> Self {
        self.computation_time_ms = ms;
        self
    }

    /// Returns true if a solution was found.
    pub fn is_solved(&self) -> bool {
        self.best.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(power_centi: u64, points: [u32; 3], indices: [usize; 3]) -> Candidate {
        Candidate {
            combos: [Combo::empty(); 3],
            usage: GemCounts::new(),
            points,
            will: [0; 3],
            side_nodes: 0,
            core_power: 0,
            synergy_bonus: 0,
            power_centi,
            indices,
        }
    }

    #[test]
    fn test_rank_prefers_power() {
        let a = candidate(90_000, [10, 0, 0], [5, 5, 5]);
        let b = candidate(80_000, [20, 20, 20], [0, 0, 0]);
        assert!(a.outranks(&b));
        assert!(!b.outranks(&a));
    }

    #[test]
    fn test_rank_breaks_ties_on_points_then_indices() {
        let a = candidate(1_000, [14, 0, 0], [3, 0, 0]);
        let b = candidate(1_000, [13, 0, 0], [0, 0, 0]);
        assert!(a.outranks(&b));

        let c = candidate(1_000, [14, 0, 0], [0, 1, 0]);
        assert!(c.outranks(&a));
        assert!(!c.outranks(&c));
    }

    #[test]
    fn test_combat_power_excludes_bonus() {
        let mut c = candidate(0, [20, 20, 0], [0; 3]);
        c.core_power = 1_800;
        c.synergy_bonus = 500;
        c.side_nodes = 10;
        c.power_centi = (1_800 + 500) * 100 + 10 * 314;

        assert!((c.power() - 2_331.4).abs() < 1e-9);
        assert_eq!(c.side_node_power_centi(), 3_140);
        assert!((c.combat_power_increase() - 0.18314).abs() < 1e-12);
    }

    #[test]
    fn test_zero_point_best_is_no_solution() {
        let empty = candidate(0, [0, 0, 0], [0; 3]);
        let result = OptimizationResult::new(Some(empty), SearchStats::default());
        assert!(!result.is_solved());

        let scored = candidate(15_000, [10, 0, 0], [0; 3]);
        let result = OptimizationResult::new(Some(scored), SearchStats::default());
        assert!(result.is_solved());
    }

    #[test]
    fn test_stats_merge() {
        let mut a = SearchStats {
            pairs_pruned: 2,
            triples_evaluated: 10,
            feasible_triples: 4,
            ..Default::default()
        };
        let b = SearchStats {
            pairs_pruned: 1,
            triples_evaluated: 5,
            feasible_triples: 5,
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.pairs_pruned, 3);
        assert_eq!(a.triples_evaluated, 15);
        assert_eq!(a.feasible_triples, 9);
    }
}
