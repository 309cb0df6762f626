//! Row/column line-of-fire checks.
//!
//! Projectiles travel along one of the four cardinal directions, so only a
//! hostile on the agent's own row or column can be hit.  The line is clear
//! when no `Wall` lies strictly between the agent and the hostile; other
//! units and fog do not block it.

use tracing::debug;

use ctf_core::{Cell, Direction, Tile, VisionWindow};

/// A hostile unit seen this tick, as an offset from the observer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hostile {
    pub dx:       i32,
    pub dy:       i32,
    /// Manhattan distance from the observer.
    pub distance: u32,
}

impl Hostile {
    /// Absolute cell given the observer's `position`.
    #[inline]
    pub fn cell(&self, position: Cell) -> Cell {
        VisionWindow::to_world(position, self.dx, self.dy)
    }

    /// Direction to fire in, or `None` if the hostile is off-axis.
    pub fn aligned_direction(&self) -> Option<Direction> {
        match (self.dx.signum(), self.dy.signum()) {
            (0, -1) => Some(Direction::Up),
            (0, 1)  => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0)  => Some(Direction::Right),
            _       => None,
        }
    }
}

/// Outcome of a positive engagement check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FireDecision {
    pub direction: Direction,
    pub target:    Hostile,
}

/// Stateless engagement logic.
#[derive(Copy, Clone, Debug, Default)]
pub struct EngagementEvaluator;

impl EngagementEvaluator {
    /// Every hostile in `window`, nearest first.  Equal distances keep
    /// row-major window order.
    pub fn hostiles(window: &VisionWindow) -> Vec<Hostile> {
        let mut found: Vec<Hostile> = window
            .iter()
            .filter(|&(dx, dy, t)| t == Tile::Hostile && (dx, dy) != (0, 0))
            .map(|(dx, dy, _)| Hostile { dx, dy, distance: dx.unsigned_abs() + dy.unsigned_abs() })
            .collect();
        // Stable sort keeps scan order among ties.
        found.sort_by_key(|h| h.distance);
        found
    }

    /// The hostile to chase when nothing can be shot.
    pub fn nearest_hostile(window: &VisionWindow) -> Option<Hostile> {
        Self::hostiles(window).into_iter().next()
    }

    /// `true` when `target` is row/column aligned and no wall lies strictly
    /// between it and the observer.
    pub fn has_clear_line(window: &VisionWindow, target: &Hostile) -> bool {
        let Some(dir) = target.aligned_direction() else {
            return false;
        };
        let (sx, sy) = dir.delta();
        (1..target.distance as i32)
            .all(|k| window.at_offset(sx * k, sy * k).is_none_or(|t| !t.is_wall()))
    }

    /// Decide whether to fire this tick.
    ///
    /// Fires at the nearest aligned hostile with a clear line, provided the
    /// host allows shooting and at least one round is left.
    pub fn evaluate(window: &VisionWindow, can_shoot: bool, ammo: u32) -> Option<FireDecision> {
        if !can_shoot || ammo == 0 {
            return None;
        }
        let decision = Self::hostiles(window)
            .into_iter()
            .filter(|h| Self::has_clear_line(window, h))
            .find_map(|h| h.aligned_direction().map(|direction| FireDecision { direction, target: h }));
        if let Some(d) = &decision {
            debug!(direction = %d.direction, distance = d.target.distance, "line of fire");
        }
        decision
    }
}
