//! `ctf-belief` — what a team knows and what each agent remembers.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`map`]       | `BeliefMap` — `Cell → Terrain`, built from vision           |
//! | [`knowledge`] | `SharedKnowledge` — the map, flag sightings, agent positions |
//! | [`memory`]    | `AgentMemory` — per-agent position history and stuck state  |
//! | [`bump`]      | `BumpLearner`, `BumpOutcome` — walls inferred from failed moves |
//!
//! # Update order
//!
//! Every tick, for every agent, in this order:
//!
//! 1. [`BumpLearner::check`] compares last tick's pending target with the
//!    current position and may mark a wall.
//! 2. [`SharedKnowledge::observe`] folds the vision window into the map.
//!    A wall inferred in step 1 survives it, because vision still shows
//!    the reading the move failed under.  See [`BeliefMap`] for when an
//!    inferred wall is lifted.
//! 3. The dispatcher decides, then calls [`AgentMemory::record`].
//!
//! Sharing is explicit: the team session owns one `SharedKnowledge` and
//! lends it `&mut` to each agent in turn.

pub mod bump;
pub mod knowledge;
pub mod map;
pub mod memory;

#[cfg(test)]
mod tests;

pub use bump::{BumpLearner, BumpOutcome};
pub use knowledge::{ObservationSummary, SharedKnowledge};
pub use map::BeliefMap;
pub use memory::AgentMemory;
