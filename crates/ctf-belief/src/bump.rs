//! Bump learning: walls inferred from moves that went nowhere.

use tracing::debug;

use ctf_core::{Cell, Tile, VisionWindow};

use crate::{AgentMemory, BeliefMap};

/// Result of comparing last tick's intent with this tick's position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BumpOutcome {
    /// No move was pending (first tick, or the agent shot / idled).
    Idle,
    /// The agent is no longer where it was; the stuck counter was reset.
    Moved,
    /// The agent stayed put while trying to enter the contained cell, which
    /// is now a wall in the belief map.
    Bumped(Cell),
}

/// Stateless: everything it needs lives in [`AgentMemory`] and [`BeliefMap`].
pub struct BumpLearner;

impl BumpLearner {
    /// Consume the pending target in `memory` and classify the outcome.
    ///
    /// `window` is this tick's view from `position`; a bumped target is
    /// stored with the tile it shows there, so the following
    /// [`BeliefMap::observe`] of that same view keeps the wall.  Must run
    /// before the tick's vision is folded into `map`.
    pub fn check(
        memory:   &mut AgentMemory,
        window:   &VisionWindow,
        position: Cell,
        map:      &mut BeliefMap,
    ) -> BumpOutcome {
        let pending = memory.pending_target.take();
        let stayed  = memory.previous_position == Some(position);

        match pending {
            Some(target) if stayed && target != position => {
                let reading = window
                    .at_offset(target.x - position.x, target.y - position.y)
                    .unwrap_or(Tile::Unknown);
                map.mark_wall(target, reading);
                memory.stuck_count += 1;
                memory.push_blocked(target);
                memory.failed_direction = position.direction_to(target);
                debug!(%position, %target, stuck = memory.stuck_count, "move blocked; inferred wall");
                BumpOutcome::Bumped(target)
            }
            Some(_) => {
                memory.clear_stuck();
                BumpOutcome::Moved
            }
            None => {
                memory.clear_stuck();
                BumpOutcome::Idle
            }
        }
    }
}
