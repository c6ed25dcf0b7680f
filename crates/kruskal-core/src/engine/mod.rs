//! Engine module for KruskalEngine implementation
//!
//! Provides the engine, the tree goal (min/max) and the stable edge ordering
//! used for deterministic trace generation.

pub mod core;
mod goal;
mod ordering;

pub use self::core::KruskalEngine;
pub use goal::{ParseTreeGoalError, TreeGoal};
pub use ordering::sort_edges;
