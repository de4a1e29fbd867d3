//! # Ark Grid
//!
//! Gem optimizer for the three-core Ark Grid.
//!
//! Given an inventory of gems (each with a will cost, a point value and a
//! side-point value) and three cores with will budgets and point caps, finds
//! the disjoint assignment of gems to cores with the highest power score.
//!
//! ## Quick Start
//!
//! ```rust
//! use arkgrid::{CoreConfig, GemType, GridOptimizer, GridProblem, Inventory, Rarity, Solver};
//!
//! let inventory = Inventory::new()
//!     .with_gems(GemType::A, [10, 8, 6, 4])
//!     .with_gems(GemType::D, [5, 5]);
//!
//! let problem = GridProblem::new(inventory).with_cores([
//!     CoreConfig::new(Rarity::Relic),
//!     CoreConfig::new(Rarity::Legendary),
//!     CoreConfig::none(),
//! ]);
//!
//! let result = GridOptimizer::default_config().solve(&problem).unwrap();
//! assert!(result.is_solved());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core types, game data and the solver trait.
pub use arkgrid_core as core;

/// Combo generation and cross-core search.
pub use arkgrid_search as search;

// Re-export commonly used types at root level
pub use arkgrid_core::{
    Candidate, Combo, CoreConfig, Error, GemType, GridProblem, Inventory, OptimizationResult,
    Path, Rarity, Result, Role, SearchConfig, Solver,
};
pub use arkgrid_search::{optimize_three_cores, GridOptimizer};
