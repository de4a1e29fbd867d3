//! # Ark Grid Core
//!
//! Core types and static game data for the Ark Grid gem optimizer.
//!
//! The optimizer assigns gems from a shared inventory to three cores so that
//! the combined power score is maximized. This crate holds everything the
//! search algorithms in `arkgrid-search` share:
//!
//! - **Gem catalog**: [`GemType`] with its will cost and point value
//! - **Inventory**: owned gems and their side-point values
//! - **Grid configuration**: [`Rarity`], [`CoreConfig`], [`Path`], [`Role`]
//! - **Power model**: tiered power tables and side-node values
//! - **Results**: [`Combo`], [`Candidate`], [`OptimizationResult`]
//! - **Solver trait**: common interface plus [`SearchConfig`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod combo;
pub mod error;
pub mod gem;
pub mod grid;
pub mod inventory;
pub mod power;
pub mod result;
pub mod solver;

// Re-exports
pub use combo::Combo;
pub use error::{Error, Result};
pub use gem::{GemCounts, GemStats, GemType, GEM_TYPE_COUNT, MAX_GEMS_PER_CORE};
pub use grid::{CoreConfig, GridProblem, Path, Rarity, Role, CORE_COUNT};
pub use inventory::{Inventory, SortedInventory};
pub use result::{Candidate, OptimizationResult, RankKey, SearchStats};
pub use solver::{ProgressCallback, ProgressInfo, SearchConfig, Solver};
