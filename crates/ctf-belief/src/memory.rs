//! Per-agent memory.  Never shared between agents.

use std::collections::VecDeque;

use ctf_core::{Cell, Direction};

/// What one agent carries from one tick to the next.
///
/// | Field              | Written by                | Read by                        |
/// |--------------------|---------------------------|--------------------------------|
/// | `previous_position`| [`record`][Self::record]  | `BumpLearner`                  |
/// | `pending_target`   | [`record`][Self::record]  | `BumpLearner`                  |
/// | `history`          | [`record`][Self::record]  | path search, frontier scoring  |
/// | `stuck_count`      | `BumpLearner`             | dispatcher                     |
/// | `blocked`          | `BumpLearner`             | path search, local fallbacks   |
#[derive(Clone, Debug)]
pub struct AgentMemory {
    pub(crate) previous_position: Option<Cell>,
    pub(crate) pending_target:    Option<Cell>,
    pub(crate) history:           VecDeque<Cell>,
    pub(crate) history_len:       usize,
    pub(crate) stuck_count:       u32,
    /// Targets whose entry failed since the agent last moved.
    pub(crate) blocked:           Vec<Cell>,
    pub(crate) max_blocked:       usize,
    /// Direction of the most recent failed move.
    pub(crate) failed_direction:  Option<Direction>,
}

impl AgentMemory {
    /// A capacity of zero turns the history or the blocked list off.
    pub fn new(history_len: usize, max_blocked: usize) -> Self {
        Self {
            previous_position: None,
            pending_target:    None,
            history:           VecDeque::with_capacity(history_len),
            history_len,
            stuck_count:       0,
            blocked:           Vec::new(),
            max_blocked,
            failed_direction:  None,
        }
    }

    /// Close out the tick: remember where the agent stood and which cell it
    /// is about to try to enter (`None` for shoot / no-op).
    pub fn record(&mut self, position: Cell, target: Option<Cell>) {
        self.previous_position = Some(position);
        self.pending_target = target;
        if self.history_len == 0 {
            return;
        }
        if self.history.len() == self.history_len {
            self.history.pop_front();
        }
        self.history.push_back(position);
    }

    pub fn previous_position(&self) -> Option<Cell> {
        self.previous_position
    }

    pub fn pending_target(&self) -> Option<Cell> {
        self.pending_target
    }

    /// Recently visited cells, oldest first.
    pub fn history(&self) -> impl Iterator<Item = Cell> + '_ {
        self.history.iter().copied()
    }

    pub fn visited_recently(&self, cell: Cell) -> bool {
        self.history.contains(&cell)
    }

    pub fn stuck_count(&self) -> u32 {
        self.stuck_count
    }

    pub fn blocked(&self) -> &[Cell] {
        &self.blocked
    }

    pub fn failed_direction(&self) -> Option<Direction> {
        self.failed_direction
    }

    pub(crate) fn push_blocked(&mut self, cell: Cell) {
        if self.max_blocked == 0 || self.blocked.contains(&cell) {
            return;
        }
        if self.blocked.len() == self.max_blocked {
            self.blocked.remove(0);
        }
        self.blocked.push(cell);
    }

    pub(crate) fn clear_stuck(&mut self) {
        self.stuck_count = 0;
        self.blocked.clear();
        self.failed_direction = None;
    }

    /// Forget everything (match end).
    pub fn reset(&mut self) {
        self.previous_position = None;
        self.pending_target = None;
        self.history.clear();
        self.clear_stuck();
    }
}
