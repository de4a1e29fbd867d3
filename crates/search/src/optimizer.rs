//! Grid optimizer: combo generation plus cross-core search behind the
//! [`Solver`] trait.

use crate::generator::core_candidates;
use crate::searcher::{CrossCoreSearch, SearchControl};
use arkgrid_core::solver::{ProgressCallback, ProgressInfo, SearchConfig, Solver};
use arkgrid_core::{
    Candidate, Combo, CoreConfig, GridProblem, Inventory, OptimizationResult, Path, Result, Role,
    SearchStats, CORE_COUNT,
};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Ark Grid optimizer.
pub struct GridOptimizer {
    config: SearchConfig,
    cancelled: Arc<AtomicBool>,
}

impl Default for GridOptimizer {
    fn default() -> Self {
        Self::default_config()
    }
}

impl GridOptimizer {
    /// Creates a new optimizer with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Creates an optimizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(SearchConfig::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the cancellation flag, for cancelling from another thread or
    /// from a progress callback.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    fn optimize(
        &self,
        problem: &GridProblem,
        progress: Option<&ProgressCallback>,
    ) -> Result<OptimizationResult> {
        self.config.validate()?;

        let start = Instant::now();
        let inventory = problem.inventory.sorted();
        let mut stats = SearchStats::default();

        let lists: [Vec<Combo>; CORE_COUNT] = std::array::from_fn(|i| {
            let candidates = core_candidates(&inventory, &problem.cores[i], &self.config);
            log::debug!(
                "Core {} ({}): {} combos generated, {} kept",
                i,
                problem.cores[i].rarity,
                candidates.generated,
                candidates.combos.len()
            );
            stats.generated[i] = candidates.generated;
            stats.kept[i] = candidates.combos.len();
            candidates.combos
        });

        let search =
            CrossCoreSearch::new(&inventory, lists, &problem.cores, problem.path, problem.role);
        let outer = search.outer_len();
        let control = SearchControl {
            cancelled: &self.cancelled,
            start,
            time_limit_ms: self.config.time_limit_ms,
            threads: self.config.threads,
            progress,
        };

        let (best, search_stats) = search.run(&control).map_err(|e| {
            log::warn!("Search stopped after {}ms: {}", control.elapsed_ms(), e);
            e
        })?;
        stats.merge(&search_stats);

        let elapsed_ms = start.elapsed().as_millis() as u64;
        let result = OptimizationResult::new(best, stats).with_computation_time(elapsed_ms);

        log::info!(
            "Search finished in {}ms: {} feasible of {} triples, {} pairs pruned, best power {}",
            elapsed_ms,
            result.stats.feasible_triples,
            result.stats.triples_evaluated,
            result.stats.pairs_pruned,
            result
                .best
                .as_ref()
                .map_or_else(|| "none".to_string(), |c| format!("{:.2}", c.power()))
        );

        if let Some(callback) = progress {
            callback(ProgressInfo {
                completed: outer,
                total: outer,
                best_power: result.best.as_ref().map(Candidate::power),
                elapsed_ms,
                running: false,
            });
        }

        Ok(result)
    }
}

impl Solver for GridOptimizer {
    fn solve(&self, problem: &GridProblem) -> Result<OptimizationResult> {
        // Reset cancellation flag
        self.cancelled.store(false, Ordering::Relaxed);
        self.optimize(problem, None)
    }

    fn solve_with_progress(
        &self,
        problem: &GridProblem,
        callback: ProgressCallback,
    ) -> Result<OptimizationResult> {
        self.cancelled.store(false, Ordering::Relaxed);
        self.optimize(problem, Some(&callback))
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

/// Finds the best assignment of `inventory` to three cores with the
/// default search configuration.
pub fn optimize_three_cores(
    inventory: &Inventory,
    cores: &[CoreConfig; CORE_COUNT],
    path: Path,
    role: Role,
) -> Result<OptimizationResult> {
    let problem = GridProblem::new(inventory.clone())
        .with_cores(*cores)
        .with_path(path)
        .with_role(role);
    GridOptimizer::default_config().solve(&problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkgrid_core::{Error, GemType, Rarity};

    fn scenario_inventory() -> Inventory {
        Inventory::new().with_gems(GemType::A, [10, 8, 6, 4])
    }

    #[test]
    fn test_solve_records_stats() {
        let problem = GridProblem::new(scenario_inventory()).with_cores([
            CoreConfig::new(Rarity::Relic),
            CoreConfig::none(),
            CoreConfig::none(),
        ]);
        let optimizer = GridOptimizer::new(SearchConfig::new().with_threads(1));

        let result = optimizer.solve(&problem).unwrap();
        assert!(result.is_solved());
        assert_eq!(result.stats.generated, [5, 1, 1]);
        assert_eq!(result.stats.kept, [5, 1, 1]);
        assert_eq!(result.stats.feasible_triples, 5);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let optimizer = GridOptimizer::new(SearchConfig::new().with_max_candidates(0));
        let problem = GridProblem::new(scenario_inventory());
        assert!(matches!(
            optimizer.solve(&problem),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_solve_resets_cancel_flag() {
        let optimizer = GridOptimizer::default_config();
        optimizer.cancel();
        assert!(optimizer.cancel_handle().load(Ordering::Relaxed));

        let problem = GridProblem::new(scenario_inventory());
        assert!(optimizer.solve(&problem).is_ok());
    }

    #[test]
    fn test_final_progress_report() {
        use std::sync::Mutex;

        let reports: Arc<Mutex<Vec<ProgressInfo>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&reports);
        let optimizer = GridOptimizer::new(SearchConfig::new().with_threads(1));
        let problem = GridProblem::new(scenario_inventory());

        optimizer
            .solve_with_progress(
                &problem,
                Box::new(move |info: ProgressInfo| sink.lock().unwrap().push(info)),
            )
            .unwrap();

        let reports = reports.lock().unwrap();
        let last = reports.last().unwrap();
        assert!(!last.running);
        assert_eq!(last.completed, last.total);
        assert!(last.best_power.is_some());
        assert!(reports[..reports.len() - 1].iter().all(|r| r.running));
    }
}
