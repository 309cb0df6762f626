//! Single-step fallbacks that only look at the agent's immediate surroundings.
//!
//! Used when path search fails or has nothing to aim at.  A direction is
//! *open* when the neighbour is in bounds, not in the agent's blocked list,
//! and not a wall in the current vision window (fog counts as open).

use ctf_core::{Bounds, Cell, Direction, VisionWindow};

/// The agent's neighbourhood this tick.
#[derive(Copy, Clone, Debug)]
pub struct LocalView<'a> {
    pub window:   &'a VisionWindow,
    pub position: Cell,
    pub bounds:   Bounds,
    pub avoid:    &'a [Cell],
}

impl<'a> LocalView<'a> {
    pub fn new(window: &'a VisionWindow, position: Cell, bounds: Bounds, avoid: &'a [Cell]) -> Self {
        Self { window, position, bounds, avoid }
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        let cell = self.position.step(dir);
        if !self.bounds.contains(cell) || self.avoid.contains(&cell) {
            return false;
        }
        let (dx, dy) = dir.delta();
        !self.window.at_offset(dx, dy).is_some_and(|t| t.is_wall())
    }

    /// First open direction in `order`.
    pub fn first_open(&self, order: &[Direction]) -> Option<Direction> {
        order.iter().copied().find(|&d| self.is_open(d))
    }

    /// Greedy single step toward `goal`: the dominant axis first, then the
    /// other axis if it has any distance left.
    pub fn greedy_toward(&self, goal: Cell) -> Option<Direction> {
        self.first_open(&greedy_preference(self.position, goal))
    }

    /// Any open direction at all, in canonical order.
    pub fn any_open(&self) -> Option<Direction> {
        self.first_open(&Direction::ALL)
    }
}

/// Directions that reduce the distance from `from` to `to`, dominant axis
/// first.  Horizontal wins a tie.  Empty when `from == to`.
pub fn greedy_preference(from: Cell, to: Cell) -> Vec<Direction> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let horizontal = if dx > 0 { Direction::Right } else { Direction::Left };
    let vertical   = if dy > 0 { Direction::Down } else { Direction::Up };

    let mut prefer = Vec::with_capacity(2);
    if dx == 0 && dy == 0 {
        return prefer;
    }
    if dx.abs() >= dy.abs() {
        prefer.push(horizontal);
        if dy != 0 {
            prefer.push(vertical);
        }
    } else {
        prefer.push(vertical);
        if dx != 0 {
            prefer.push(horizontal);
        }
    }
    prefer
}

/// Reorder `order` to escape a failed move in `failed`: the two perpendicular
/// directions first, then the rest of `order`, and `failed` itself last.
pub fn escape_order(order: &[Direction], failed: Direction) -> Vec<Direction> {
    let mut out: Vec<Direction> = failed.perpendicular().to_vec();
    for &d in order {
        if d != failed && !out.contains(&d) {
            out.push(d);
        }
    }
    out.push(failed);
    out
}
