//! Team-wide knowledge: the belief map plus remembered flag positions.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use ctf_core::{Cell, Tile, VisionWindow};

use crate::BeliefMap;

/// What one call to [`SharedKnowledge::observe`] learned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ObservationSummary {
    /// Cells written to the map.
    pub written:    usize,
    /// Enemy flag position, if visible this tick.
    pub enemy_flag: Option<Cell>,
    /// Home flag position, if visible this tick.
    pub home_flag:  Option<Cell>,
}

/// The shared-state handle every agent of a team reads and writes.
///
/// Owned by the team session for the lifetime of a match and lent `&mut` to
/// one agent at a time, so writes within a tick are sequential and the last
/// writer for a cell wins.
#[derive(Clone, Debug, Default)]
pub struct SharedKnowledge {
    pub map:        BeliefMap,
    /// Last place the enemy flag was seen.
    pub enemy_flag: Option<Cell>,
    /// Last place the team's own flag was seen.
    pub home_flag:  Option<Cell>,
    /// Where each agent (by index) stood on its latest tick.
    pub positions:  FxHashMap<usize, Cell>,
}

impl SharedKnowledge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `window` (seen from `position`) into the map and update the
    /// remembered flag positions.  Last sighting wins; sightings never decay.
    pub fn observe(&mut self, window: &VisionWindow, position: Cell) -> ObservationSummary {
        let written = self.map.observe(window, position);
        let mut summary = ObservationSummary { written, ..ObservationSummary::default() };

        for (dx, dy, tile) in window.iter() {
            let cell = VisionWindow::to_world(position, dx, dy);
            match tile {
                Tile::EnemyFlag => summary.enemy_flag = Some(cell),
                Tile::HomeFlag  => summary.home_flag = Some(cell),
                _ => {}
            }
        }

        if let Some(flag) = summary.enemy_flag {
            if self.enemy_flag != Some(flag) {
                debug!(%flag, "enemy flag sighted");
            }
            self.enemy_flag = Some(flag);
        }
        if let Some(flag) = summary.home_flag {
            if self.home_flag != Some(flag) {
                debug!(%flag, "home flag sighted");
            }
            self.home_flag = Some(flag);
        }

        trace!(%position, written, known = self.map.len(), "belief map updated");
        summary
    }

    /// Publish agent `index`'s current position to its teammates.
    pub fn publish_position(&mut self, index: usize, position: Cell) {
        self.positions.insert(index, position);
    }

    pub fn position_of(&self, index: usize) -> Option<Cell> {
        self.positions.get(&index).copied()
    }

    /// Forget everything (match end).
    pub fn reset(&mut self) {
        self.map.clear();
        self.enemy_flag = None;
        self.home_flag = None;
        self.positions.clear();
    }
}
