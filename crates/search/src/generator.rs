//! Per-core combo enumeration and ranking.
//!
//! Every multiset of at most [`MAX_GEMS_PER_CORE`] gems that fits a core's
//! will budget is enumerated, then ranked by points and will and cut down
//! to a bounded candidate list.

use arkgrid_core::{Combo, CoreConfig, GemType, SearchConfig, SortedInventory, MAX_GEMS_PER_CORE};

/// Candidate list of one core.
#[derive(Debug, Clone, Default)]
pub struct CoreCandidates {
    /// Ranked, truncated combos meeting the core's minimum.
    pub combos: Vec<Combo>,
    /// Number of combos enumerated before ranking.
    pub generated: usize,
}

struct Enumerator<'a> {
    inventory: &'a SortedInventory,
    max_will: u32,
    current: Combo,
    out: Vec<Combo>,
}

impl Enumerator<'_> {
    fn visit(&mut self, start: usize) {
        self.out.push(self.current);

        if self.current.gem_count() == MAX_GEMS_PER_CORE {
            return;
        }

        for &gem in &GemType::ALL[start..] {
            if self.current.counts.get(gem) >= self.inventory.count(gem) {
                continue;
            }
            if self.current.will + gem.will() > self.max_will {
                continue;
            }

            self.push(gem);
            self.visit(gem.index());
            self.pop(gem);
        }
    }

    #[inline]
    fn push(&mut self, gem: GemType) {
        self.current.counts.increment(gem);
        self.current.will += gem.will();
        self.current.points += gem.points();
    }

    #[inline]
    fn pop(&mut self, gem: GemType) {
        self.current.counts.decrement(gem);
        self.current.will -= gem.will();
        self.current.points -= gem.points();
    }
}

/// Enumerates every combo that fits `max_will` and the inventory.
///
/// Gems are chosen in non-decreasing catalog order, so each multiset is
/// produced once. The empty combo is always first.
pub fn generate_combos(inventory: &SortedInventory, max_will: u32) -> Vec<Combo> {
    let mut enumerator = Enumerator {
        inventory,
        max_will,
        current: Combo::empty(),
        out: Vec::new(),
    };
    enumerator.visit(0);
    enumerator.out
}

/// Ranks combos and keeps a bounded subset.
///
/// Combos are grouped by points, highest first. Inside a group they are
/// ordered by will ascending (enumeration order among equals); the first
/// `efficient_per_tier` are kept, followed by the last
/// `inefficient_per_tier` in descending will order, skipping those already
/// kept. The concatenation is cut to `max_candidates`.
pub fn rank_combos(mut combos: Vec<Combo>, config: &SearchConfig) -> Vec<Combo> {
    combos.sort_by(|a, b| b.points.cmp(&a.points).then(a.will.cmp(&b.will)));

    let mut ranked = Vec::with_capacity(config.max_candidates.min(combos.len()));
    let mut rest = combos.as_slice();

    while let Some(first) = rest.first() {
        let len = rest
            .iter()
            .position(|c| c.points != first.points)
            .unwrap_or(rest.len());
        let (group, tail) = rest.split_at(len);
        rest = tail;

        let efficient = config.efficient_per_tier.min(len);
        ranked.extend_from_slice(&group[..efficient]);

        let inefficient_start = len.saturating_sub(config.inefficient_per_tier).max(efficient);
        ranked.extend(group[inefficient_start..].iter().rev().copied());

        if ranked.len() >= config.max_candidates {
            break;
        }
    }

    ranked.truncate(config.max_candidates);
    ranked
}

/// Builds the candidate list of one core.
///
/// Combos whose capped points fall below the core's minimum are dropped
/// after truncation; the relative order of the others is unchanged.
pub fn core_candidates(
    inventory: &SortedInventory,
    core: &CoreConfig,
    config: &SearchConfig,
) -> CoreCandidates {
    let all = generate_combos(inventory, core.will_budget());
    let generated = all.len();

    let cap = core.point_cap();
    let mut combos = rank_combos(all, config);
    combos.retain(|c| c.capped_points(cap) >= core.min_points);

    CoreCandidates { combos, generated }
}
