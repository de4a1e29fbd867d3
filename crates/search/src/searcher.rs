//! Three-core cross-product search.
//!
//! Every core-0 × core-1 pair is checked against the inventory before the
//! core-2 loop runs, so infeasible pairs cost a single check. The outer
//! (core-0) loop is the unit of parallel work: each outer index produces a
//! local best, and local bests are reduced with the full [`RankKey`], which
//! makes the parallel outcome identical to a sequential scan.

use arkgrid_core::power::{core_power, order_synergy, side_node_value_centi};
use arkgrid_core::{
    Candidate, Combo, CoreConfig, Error, Path, ProgressCallback, ProgressInfo, RankKey, Result,
    Role, SearchStats, SortedInventory, CORE_COUNT,
};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

/// A combo with its capped points and tier power for one core.
#[derive(Debug, Clone, Copy)]
struct ScoredCombo {
    combo: Combo,
    points: u32,
    power: u32,
}

/// Run-time controls of a search.
pub struct SearchControl<'a> {
    /// Checked once per outer iteration.
    pub cancelled: &'a AtomicBool,
    /// Start of the run, for the time limit and progress.
    pub start: Instant,
    /// Maximum computation time in milliseconds (0 = unlimited).
    pub time_limit_ms: u64,
    /// Number of threads (0 = rayon default, 1 = sequential).
    pub threads: usize,
    /// Called after each outer iteration.
    pub progress: Option<&'a ProgressCallback>,
}

impl SearchControl<'_> {
    /// Milliseconds since the start of the run.
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn check(&self) -> Result<()> {
        if self.cancelled.load(Ordering::Relaxed) {
            return Err(Error::Cancelled);
        }
        if self.time_limit_ms > 0 && self.elapsed_ms() >= self.time_limit_ms {
            return Err(Error::Timeout(self.time_limit_ms));
        }
        Ok(())
    }
}

/// Shared progress counters, safe to update from worker threads.
struct ProgressTracker {
    total: usize,
    completed: AtomicUsize,
    /// Best power in hundredths plus one; zero while nothing is found.
    best_centi: AtomicU64,
}

impl ProgressTracker {
    fn new(total: usize) -> Self {
        Self {
            total,
            completed: AtomicUsize::new(0),
            best_centi: AtomicU64::new(0),
        }
    }

    fn record(&self, local_best: Option<&Candidate>, control: &SearchControl<'_>) {
        if let Some(candidate) = local_best {
            self.best_centi
                .fetch_max(candidate.power_centi + 1, Ordering::Relaxed);
        }
        let completed = self.completed.fetch_add(1, Ordering::Relaxed) + 1;

        if let Some(callback) = control.progress {
            let best = self.best_centi.load(Ordering::Relaxed);
            callback(ProgressInfo {
                completed,
                total: self.total,
                best_power: (best > 0).then(|| (best - 1) as f64 / 100.0),
                elapsed_ms: control.elapsed_ms(),
                running: true,
            });
        }
    }
}

/// Best triple and counters of one outer iteration.
#[derive(Default)]
struct OuterBest {
    best: Option<Candidate>,
    stats: SearchStats,
}

/// Cross-product search over three per-core candidate lists.
pub struct CrossCoreSearch<'a> {
    inventory: &'a SortedInventory,
    lists: [Vec<ScoredCombo>; CORE_COUNT],
    path: Path,
    side_value_centi: u64,
}

impl<'a> CrossCoreSearch<'a> {
    /// Prepares a search. Capped points and tier power of every combo are
    /// computed once here.
    pub fn new(
        inventory: &'a SortedInventory,
        lists: [Vec<Combo>; CORE_COUNT],
        cores: &[CoreConfig; CORE_COUNT],
        path: Path,
        role: Role,
    ) -> Self {
        let score = |combos: Vec<Combo>, index: usize| -> Vec<ScoredCombo> {
            let cap = cores[index].point_cap();
            combos
                .into_iter()
                .map(|combo| {
                    let points = combo.capped_points(cap);
                    ScoredCombo {
                        combo,
                        points,
                        power: core_power(points, index, path, role),
                    }
                })
                .collect()
        };
        let [list0, list1, list2] = lists;

        Self {
            inventory,
            lists: [score(list0, 0), score(list1, 1), score(list2, 2)],
            path,
            side_value_centi: side_node_value_centi(role),
        }
    }

    /// Number of outer (core-0) iterations.
    pub fn outer_len(&self) -> usize {
        self.lists[0].len()
    }

    /// Runs the search.
    ///
    /// Returns the best candidate (if any triple is feasible) with the
    /// enumeration counters, or an error when cancelled, timed out, or the
    /// thread pool cannot be built.
    pub fn run(&self, control: &SearchControl<'_>) -> Result<(Option<Candidate>, SearchStats)> {
        let n = self.outer_len();
        let tracker = ProgressTracker::new(n);

        let parts: Vec<OuterBest> = match control.threads {
            1 => (0..n)
                .map(|i0| self.outer_step(i0, control, &tracker))
                .collect::<Result<_>>()?,
            0 => (0..n)
                .into_par_iter()
                .map(|i0| self.outer_step(i0, control, &tracker))
                .collect::<Result<_>>()?,
            threads => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| Error::ThreadPool(e.to_string()))?;
                pool.install(|| {
                    (0..n)
                        .into_par_iter()
                        .map(|i0| self.outer_step(i0, control, &tracker))
                        .collect::<Result<_>>()
                })?
            }
        };

        let mut stats = SearchStats::default();
        let mut best: Option<Candidate> = None;
        for part in parts {
            stats.merge(&part.stats);
            if let Some(candidate) = part.best {
                if best.as_ref().map_or(true, |b| candidate.outranks(b)) {
                    log::debug!(
                        "New best: power {:.2}, points {:?}, indices {:?}",
                        candidate.power(),
                        candidate.points,
                        candidate.indices
                    );
                    best = Some(candidate);
                }
            }
        }

        Ok((best, stats))
    }

    fn outer_step(
        &self,
        i0: usize,
        control: &SearchControl<'_>,
        tracker: &ProgressTracker,
    ) -> Result<OuterBest> {
        control.check()?;
        let part = self.explore(i0);
        tracker.record(part.best.as_ref(), control);
        Ok(part)
    }

    /// Scans every core-1 × core-2 completion of the core-0 combo `i0`.
    fn explore(&self, i0: usize) -> OuterBest {
        let [list0, list1, list2] = &self.lists;
        let c0 = &list0[i0];
        let mut out = OuterBest::default();
        let mut best_key: Option<RankKey> = None;

        for (i1, c1) in list1.iter().enumerate() {
            let pair = c0.combo.counts.merged(&c1.combo.counts);
            if !self.inventory.fits(&pair) {
                out.stats.pairs_pruned += 1;
                continue;
            }

            for (i2, c2) in list2.iter().enumerate() {
                out.stats.triples_evaluated += 1;
                let usage = pair.merged(&c2.combo.counts);
                if !self.inventory.fits(&usage) {
                    continue;
                }
                out.stats.feasible_triples += 1;

                let points = [c0.points, c1.points, c2.points];
                let side_nodes = self.inventory.side_nodes(&usage);
                let tier_power = c0.power + c1.power + c2.power;
                let synergy_bonus = order_synergy(self.path, &points);
                let power_centi = u64::from(tier_power + synergy_bonus) * 100
                    + side_nodes * self.side_value_centi;

                let key = RankKey {
                    power_centi,
                    total_points: points.iter().sum(),
                    indices: [i0, i1, i2],
                };
                if best_key.is_some_and(|k| key <= k) {
                    continue;
                }

                best_key = Some(key);
                out.best = Some(Candidate {
                    combos: [c0.combo, c1.combo, c2.combo],
                    usage,
                    points,
                    will: [c0.combo.will, c1.combo.will, c2.combo.will],
                    side_nodes,
                    core_power: tier_power,
                    synergy_bonus,
                    power_centi,
                    indices: key.indices,
                });
            }
        }

        out
    }
}
