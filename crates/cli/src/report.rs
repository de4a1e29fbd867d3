//! Result rendering, as text and as JSON.

use crate::session::Side;
use arkgrid::core::SearchStats;
use arkgrid::{Candidate, GemType, GridProblem, OptimizationResult, Path, Rarity, Role};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// One core of the best assignment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreReport {
    pub rarity: Rarity,
    pub gems: Vec<GemType>,
    pub will: u32,
    /// Uncapped points.
    pub points: u32,
    /// Points after the core's cap.
    pub capped_points: u32,
}

/// The best assignment of a side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestReport {
    pub total_sidenodes: u64,
    pub total_power: f64,
    pub combat_power_increase: f64,
    pub synergy_bonus: u32,
    pub cores: Vec<CoreReport>,
    /// Gems left over, per type.
    pub unused: BTreeMap<GemType, usize>,
}

impl BestReport {
    fn new(problem: &GridProblem, best: &Candidate) -> Self {
        let cores = best
            .combos
            .iter()
            .zip(problem.cores.iter())
            .zip(best.points.iter())
            .map(|((combo, core), &capped)| CoreReport {
                rarity: core.rarity,
                gems: combo.gems(),
                will: combo.will,
                points: combo.points,
                capped_points: capped,
            })
            .collect();

        Self {
            total_sidenodes: best.side_nodes,
            total_power: best.power(),
            combat_power_increase: best.combat_power_increase(),
            synergy_bonus: best.synergy_bonus,
            cores,
            unused: best.remaining(&problem.inventory).into_iter().collect(),
        }
    }
}

/// Outcome of optimizing one side of a session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideReport {
    pub side: &'static str,
    pub path: Path,
    pub role: Role,
    pub best: Option<BestReport>,
    pub stats: SearchStats,
    pub computation_time_ms: u64,
}

impl SideReport {
    /// Builds the report of a solved side.
    pub fn new(side: Side, problem: &GridProblem, result: &OptimizationResult) -> Self {
        Self {
            side: side.label(),
            path: problem.path,
            role: problem.role,
            best: result.best.as_ref().map(|best| BestReport::new(problem, best)),
            stats: result.stats.clone(),
            computation_time_ms: result.computation_time_ms,
        }
    }
}

impl fmt::Display for SideReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}, {})", self.side, self.path, self.role)?;
        writeln!(f, "{:-<60}", "")?;

        let Some(best) = &self.best else {
            return writeln!(f, "  No valid combos found (or inventory empty).");
        };

        writeln!(f, "  Total Sidenodes: {}", best.total_sidenodes)?;
        writeln!(f, "  Total Power: {:.2}", best.total_power)?;
        writeln!(
            f,
            "  Combat Power Increase: {:.2}%",
            best.combat_power_increase * 100.0
        )?;

        for (i, core) in best.cores.iter().enumerate() {
            let gems = if core.gems.is_empty() {
                "-".to_string()
            } else {
                core.gems
                    .iter()
                    .map(GemType::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            write!(
                f,
                "  Core {} [{}] ({} gems): {:<8} WP: {:<3} Pts: {}",
                i + 1,
                core.rarity,
                core.gems.len(),
                gems,
                core.will,
                core.points
            )?;
            if core.capped_points != core.points {
                write!(f, " (counts {})", core.capped_points)?;
            }
            writeln!(f)?;
        }

        if best.unused.is_empty() {
            writeln!(f, "  Unused Gems: None")
        } else {
            let unused: Vec<String> = best
                .unused
                .iter()
                .map(|(gem, n)| format!("{}: {}", gem, n))
                .collect();
            writeln!(f, "  Unused Gems: {}", unused.join(", "))
        }
    }
}

/// Renders the gem catalog as a table.
pub fn catalog_table() -> String {
    let mut out = String::from("Type  Will  Points\n");
    for gem in GemType::ALL {
        out.push_str(&format!("{:<5} {:<5} {}\n", gem, gem.will(), gem.points()));
    }
    out
}
