//! # Ark Grid Search
//!
//! Search algorithms for the Ark Grid optimizer.
//!
//! - **Combo generation**: backtracking enumeration of the gem sets each core
//!   can hold, ranked and truncated per point tier
//! - **Cross-core search**: cartesian product of the three candidate lists
//!   with inventory pruning, optionally split across a rayon thread pool
//! - **Optimizer**: [`GridOptimizer`], the [`Solver`](arkgrid_core::Solver)
//!   implementation tying both together
//!
//! ## Quick Start
//!
//! ```rust
//! use arkgrid_core::{CoreConfig, GemType, Inventory, Path, Rarity, Role};
//! use arkgrid_search::optimize_three_cores;
//!
//! let inventory = Inventory::new().with_gems(GemType::A, [10, 8, 6, 4]);
//! let cores = [
//!     CoreConfig::new(Rarity::Relic),
//!     CoreConfig::none(),
//!     CoreConfig::none(),
//! ];
//!
//! let result = optimize_three_cores(&inventory, &cores, Path::Order, Role::Damage).unwrap();
//! let best = result.best.unwrap();
//! assert_eq!(best.side_nodes, 28);
//! ```

pub mod generator;
pub mod optimizer;
pub mod searcher;

pub use generator::{core_candidates, generate_combos, rank_combos, CoreCandidates};
pub use optimizer::{optimize_three_cores, GridOptimizer};
pub use searcher::{CrossCoreSearch, SearchControl};
