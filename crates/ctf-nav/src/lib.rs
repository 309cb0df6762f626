//! `ctf-nav` — getting from here to there on a partially known grid.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`cost`]     | `CostTable` — per-cell step prices derived from `NavTuning`       |
//! | [`search`]   | `PathFinder` trait, `PathQuery`, `NextStep`, `DijkstraPathFinder`, `AStarPathFinder` |
//! | [`frontier`] | `FrontierSelector`, `ExplorationTarget`                           |
//! | [`local`]    | `LocalView` — greedy and any-open-direction single-step fallbacks |
//!
//! # Failure model
//!
//! Nothing here returns `Err`.  Search reports [`NextStep::NoPath`] with a
//! reason, exploration always produces a target, and local fallbacks return
//! `Option<Direction>`.  The dispatcher chains them and ends in a no-op.

pub mod cost;
pub mod frontier;
pub mod local;
pub mod search;


pub use cost::CostTable;
pub use frontier::{ExplorationTarget, FrontierSelector, TargetKind};
pub use local::{LocalView, escape_order, greedy_preference};
pub use search::{AStarPathFinder, DijkstraPathFinder, NextStep, NoPath, PathFinder, PathQuery};
