//! Power model: tiered power tables and side-node values.
//!
//! Power values are integers. The side-node value per point is fractional
//! (3.14 for damage, 5.2 for support), so scores are accumulated in
//! hundredths ("centi-power") to stay exact.

use crate::grid::{Path, Role, CORE_COUNT};

/// Number of power tiers.
pub const TIER_COUNT: usize = 6;

/// Minimum capped points for each tier, lowest tier first.
pub const TIER_THRESHOLDS: [u32; TIER_COUNT] = [10, 14, 17, 18, 19, 20];

/// Bonus granted on the order path when cores 0 and 1 both reach
/// [`ORDER_SYNERGY_MIN_POINTS`].
pub const ORDER_SYNERGY_BONUS: u32 = 500;

/// Capped points cores 0 and 1 need for the order synergy bonus.
pub const ORDER_SYNERGY_MIN_POINTS: u32 = 14;

/// Divisor turning power into the combat-power increase ratio.
pub const COMBAT_POWER_SCALE: f64 = 10_000.0;

type CoreTable = [[u32; TIER_COUNT]; CORE_COUNT];

// Indexed [role][path][core][tier].
const POWER_TABLES: [[CoreTable; 2]; 2] = [
    // Damage
    [
        // Order
        [
            [150, 400, 850, 867, 883, 900],
            [150, 400, 850, 867, 883, 900],
            [100, 250, 550, 567, 583, 600],
        ],
        // Chaos
        [
            [50, 100, 350, 367, 383, 400],
            [50, 100, 350, 367, 383, 400],
            [50, 100, 350, 367, 383, 400],
        ],
    ],
    // Support
    [
        // Order
        [
            [120, 120, 900, 918, 930, 942],
            [120, 120, 900, 918, 930, 942],
            [0, 60, 300, 310, 320, 330],
        ],
        // Chaos
        [
            [60, 120, 540, 558, 576, 600],
            [60, 120, 540, 558, 576, 600],
            [84, 168, 672, 728, 784, 840],
        ],
    ],
];

/// Tier selected by a capped point total, or `None` below 10 points.
#[inline]
pub fn tier(points: u32) -> Option<usize> {
    TIER_THRESHOLDS.iter().rposition(|&threshold| points >= threshold)
}

/// Power contributed by one core.
///
/// # Panics
///
/// Panics if `core_index >= CORE_COUNT`.
#[inline]
pub fn core_power(capped_points: u32, core_index: usize, path: Path, role: Role) -> u32 {
    match tier(capped_points) {
        Some(t) => POWER_TABLES[role as usize][path as usize][core_index][t],
        None => 0,
    }
}

/// Order synergy bonus for a triple of capped point totals.
#[inline]
pub fn order_synergy(path: Path, capped_points: &[u32; CORE_COUNT]) -> u32 {
    let eligible = path == Path::Order
        && capped_points[0] >= ORDER_SYNERGY_MIN_POINTS
        && capped_points[1] >= ORDER_SYNERGY_MIN_POINTS;
    if eligible {
        ORDER_SYNERGY_BONUS
    } else {
        0
    }
}

/// Power of one side-node point, in hundredths.
#[inline]
pub const fn side_node_value_centi(role: Role) -> u64 {
    match role {
        Role::Damage => 314,
        Role::Support => 520,
    }
}

/// Power of one side-node point.
pub fn side_node_value(role: Role) -> f64 {
    side_node_value_centi(role) as f64 / 100.0
}
