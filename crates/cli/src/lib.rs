//! Command-line front end for the Ark Grid optimizer.
//!
//! This crate provides:
//! - Session files holding the class and general inventories
//! - Text and JSON rendering of optimization results

pub mod report;
pub mod session;

pub use report::{catalog_table, BestReport, CoreReport, SideReport};
pub use session::{Session, SessionError, Side, MAX_SIDE_POINTS};
