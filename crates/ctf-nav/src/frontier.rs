//! Frontier-based exploration.
//!
//! A *frontier cell* is a known-passable, in-bounds cell with at least one
//! in-bounds neighbour nobody has seen.  When no goal is known, the agent
//! heads for the best-scoring frontier cell:
//!
//! ```text
//! score = manhattan(agent, cell)
//!       − advance_weight × max(0, progress along the advance direction)
//!       + revisit_penalty   (if the agent stood there recently)
//! ```
//!
//! Lowest score wins; ties go to the nearer cell, then to the smaller
//! `(y, x)`.  With no frontier at all (match start, nothing seen but the
//! agent's own cell) the selector projects a target straight ahead, shifted
//! sideways per agent index so teammates fan out.

use tracing::debug;

use ctf_belief::{AgentMemory, BeliefMap};
use ctf_core::{Bounds, Cell, Direction, ExploreTuning};

/// How an exploration target was chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TargetKind {
    Frontier,
    Projection,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExplorationTarget {
    pub cell: Cell,
    pub kind: TargetKind,
}

/// Pure, deterministic exploration-target picker.
#[derive(Copy, Clone, Debug)]
pub struct FrontierSelector {
    tuning: ExploreTuning,
    bounds: Bounds,
}

impl FrontierSelector {
    pub fn new(tuning: ExploreTuning, bounds: Bounds) -> Self {
        Self { tuning, bounds }
    }

    /// Pick where agent `agent_index` at `position` should explore next.
    pub fn select(
        &self,
        map:         &BeliefMap,
        position:    Cell,
        advance:     Direction,
        agent_index: usize,
        memory:      &AgentMemory,
    ) -> ExplorationTarget {
        match self.best_frontier(map, position, advance, memory) {
            Some(cell) => {
                debug!(agent = agent_index, %cell, "exploring frontier");
                ExplorationTarget { cell, kind: TargetKind::Frontier }
            }
            None => {
                let cell = self.project(position, advance, agent_index);
                debug!(agent = agent_index, %cell, "no frontier; projecting forward");
                ExplorationTarget { cell, kind: TargetKind::Projection }
            }
        }
    }

    /// All frontier cells of `map`, sorted by `(y, x)`.
    pub fn frontier_cells(&self, map: &BeliefMap) -> Vec<Cell> {
        let mut cells: Vec<Cell> = map
            .iter()
            .filter(|&(c, t)| t.is_passable() && self.bounds.contains(c))
            .map(|(c, _)| c)
            .filter(|&c| {
                c.neighbors()
                    .any(|(_, n)| self.bounds.contains(n) && !map.is_known(n))
            })
            .collect();
        cells.sort_by_key(|c| (c.y, c.x));
        cells
    }

    /// Lowest-scoring frontier cell other than `position` and the agent's
    /// blocked cells.
    pub fn best_frontier(
        &self,
        map:      &BeliefMap,
        position: Cell,
        advance:  Direction,
        memory:   &AgentMemory,
    ) -> Option<Cell> {
        let (ax, ay) = advance.delta();
        self.frontier_cells(map)
            .into_iter()
            .filter(|&c| c != position && !memory.blocked().contains(&c))
            .min_by_key(|&c| {
                let dist = i64::from(c.manhattan(position));
                let progress = i64::from((c.x - position.x) * ax + (c.y - position.y) * ay);
                let mut score = dist - self.tuning.advance_weight * progress.max(0);
                if memory.visited_recently(c) {
                    score += self.tuning.revisit_penalty;
                }
                (score, dist, c.y, c.x)
            })
    }

    /// Forward push: `projection_distance` cells along `advance`, offset
    /// perpendicular by the agent's fan-out slot, clamped to the bounds.
    ///
    /// Slots run 0, −1, +1, −2, +2, … in multiples of `fan_out_spread`.
    pub fn project(&self, position: Cell, advance: Direction, agent_index: usize) -> Cell {
        let (ax, ay) = advance.delta();
        let d = self.tuning.projection_distance;

        let slot = agent_index.div_ceil(2) as i32;
        let sign = if agent_index % 2 == 1 { -1 } else { 1 };
        let offset = sign * slot * self.tuning.fan_out_spread;
        let (px, py) = advance.perpendicular()[1].delta();

        self.bounds
            .clamp(position.offset(ax * d + px * offset, ay * d + py * offset))
    }
}
