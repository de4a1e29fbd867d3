//! Integration tests for arkgrid-core.

use arkgrid_core::power::{core_power, order_synergy, side_node_value_centi};
use arkgrid_core::{
    Candidate, Combo, CoreConfig, GemCounts, GemType, GridProblem, Inventory, OptimizationResult,
    Path, Rarity, Role, SearchStats,
};

mod catalog_tests {
    use super::*;

    #[test]
    fn test_points_per_will_ordering() {
        // Same will, points descending within each cost class.
        for chunk in [
            [GemType::A, GemType::B, GemType::C],
            [GemType::D, GemType::E, GemType::F],
            [GemType::G, GemType::H, GemType::K],
        ] {
            assert_eq!(chunk[0].will(), chunk[1].will());
            assert_eq!(chunk[1].will(), chunk[2].will());
            assert!(chunk[0].points() > chunk[1].points());
            assert!(chunk[1].points() > chunk[2].points());
        }
    }

    #[test]
    fn test_four_a_fills_legendary_budget() {
        let combo: Combo = [GemType::A; 4].into_iter().collect();
        assert_eq!(combo.will, Rarity::Legendary.will_budget());
        assert_eq!(combo.points, 20);
    }
}

mod inventory_tests {
    use super::*;

    #[test]
    fn test_side_nodes_shared_across_cores() {
        let inventory = Inventory::new().with_gems(GemType::A, [10, 8, 6, 4]);
        let sorted = inventory.sorted();

        let core0: Combo = [GemType::A, GemType::A].into_iter().collect();
        let core1: Combo = [GemType::A].into_iter().collect();
        let usage = core0.counts.merged(&core1.counts);

        assert!(sorted.fits(&usage));
        assert_eq!(sorted.side_nodes(&usage), 10 + 8 + 6);
        assert_eq!(inventory.remaining(&usage), vec![(GemType::A, 1)]);
    }

    #[test]
    fn test_fits_rejects_overuse() {
        let inventory = Inventory::new().with_gems(GemType::L, [1]);
        let usage: GemCounts = [GemType::L, GemType::L].into_iter().collect();
        assert!(!inventory.fits(&usage));
        assert!(!inventory.sorted().fits(&usage));
    }
}

mod power_tests {
    use super::*;

    #[test]
    fn test_full_damage_order_grid() {
        let points = [20, 20, 20];
        let total: u32 = (0..3)
            .map(|i| core_power(points[i], i, Path::Order, Role::Damage))
            .sum();
        assert_eq!(total, 900 + 900 + 600);
        assert_eq!(order_synergy(Path::Order, &points), 500);
    }

    #[test]
    fn test_support_chaos_third_core() {
        let powers: Vec<u32> = [10, 14, 17, 18, 19, 20]
            .iter()
            .map(|&p| core_power(p, 2, Path::Chaos, Role::Support))
            .collect();
        assert_eq!(powers, vec![84, 168, 672, 728, 784, 840]);
    }

    #[test]
    fn test_power_monotone_in_points() {
        for role in [Role::Damage, Role::Support] {
            for path in [Path::Order, Path::Chaos] {
                for core in 0..3 {
                    let mut last = 0;
                    for points in 0..=20 {
                        let p = core_power(points, core, path, role);
                        assert!(p >= last, "{role}/{path} core {core} at {points}");
                        last = p;
                    }
                }
            }
        }
    }
}

mod result_tests {
    use super::*;

    #[test]
    fn test_candidate_reporting() {
        let inventory = Inventory::new()
            .with_gems(GemType::A, [10, 8, 6, 4])
            .with_gems(GemType::B, [2]);
        let combo: Combo = [GemType::A; 4].into_iter().collect();
        let side_nodes = inventory.sorted().side_nodes(&combo.counts);
        let core = core_power(20, 0, Path::Order, Role::Damage);

        let candidate = Candidate {
            combos: [combo, Combo::empty(), Combo::empty()],
            usage: combo.counts,
            points: [20, 0, 0],
            will: [12, 0, 0],
            side_nodes,
            core_power: core,
            synergy_bonus: 0,
            power_centi: u64::from(core) * 100 + side_nodes * side_node_value_centi(Role::Damage),
            indices: [0, 0, 0],
        };

        assert_eq!(candidate.side_nodes, 28);
        assert!((candidate.power() - (900.0 + 28.0 * 3.14)).abs() < 1e-9);
        assert_eq!(candidate.total_will(), 12);
        assert_eq!(candidate.remaining(&inventory), vec![(GemType::B, 1)]);

        let result = OptimizationResult::new(Some(candidate), SearchStats::default())
            .with_computation_time(3);
        assert!(result.is_solved());
        assert_eq!(result.computation_time_ms, 3);
    }
}

mod problem_tests {
    use super::*;

    #[test]
    fn test_problem_builder() {
        let problem = GridProblem::new(Inventory::new())
            .with_core(1, CoreConfig::new(Rarity::Ancient).with_min_points(14))
            .with_path(Path::Chaos)
            .with_role(Role::from_support(true));

        assert_eq!(problem.cores[0].rarity, Rarity::Relic);
        assert_eq!(problem.cores[1].will_budget(), 17);
        assert_eq!(problem.cores[1].min_points, 14);
        assert_eq!(problem.path, Path::Chaos);
        assert_eq!(problem.role, Role::Support);
    }
}
