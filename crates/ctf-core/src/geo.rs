//! Grid geometry: cells, cardinal directions, and the playable rectangle.
//!
//! World space uses screen conventions: `x` grows to the right, `y` grows
//! downward, so [`Direction::Up`] is `(0, -1)`.

use std::fmt;

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four cardinal directions an agent can move or shoot in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Every direction, in the canonical neighbour-expansion order.
    ///
    /// Path search and the "any passable direction" fallback iterate in this
    /// order, so it is part of the deterministic tie-breaking contract.
    pub const ALL: [Direction; 4] =
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Unit step `(dx, dy)` for this direction.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left  => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up    => (0, -1),
            Direction::Down  => (0, 1),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
        }
    }

    /// The two directions at right angles to `self`, negative side first.
    #[inline]
    pub const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
            Direction::Up | Direction::Down    => [Direction::Left, Direction::Right],
        }
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Lower-case name as used by the host engine's action protocol.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Left  => "left",
            Direction::Right => "right",
            Direction::Up    => "up",
            Direction::Down  => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Cell ──────────────────────────────────────────────────────────────────────

/// An absolute grid coordinate.  Equality and hashing are by value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by an arbitrary offset.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Cell {
        Cell { x: self.x + dx, y: self.y + dy }
    }

    /// The adjacent cell in `dir`.
    #[inline]
    pub const fn step(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }

    /// 4-connected grid distance.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Neighbours paired with the direction that reaches them, in
    /// [`Direction::ALL`] order.
    pub fn neighbors(self) -> impl Iterator<Item = (Direction, Cell)> {
        Direction::ALL.into_iter().map(move |d| (d, self.step(d)))
    }

    /// Direction of a single step from `self` to `next`, or `None` when the
    /// two cells are not 4-adjacent.
    pub fn direction_to(self, next: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.step(d) == next)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// The playable rectangle, inclusive on both ends.
///
/// Cells outside the bounds are impassable for every navigation component.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    /// A `width × height` field anchored at the origin.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { min_x: 0, min_y: 0, max_x: width - 1, max_y: height - 1 }
    }

    #[inline]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min_x && cell.x <= self.max_x && cell.y >= self.min_y && cell.y <= self.max_y
    }

    /// Nearest in-bounds cell to `cell`.
    pub fn clamp(&self, cell: Cell) -> Cell {
        Cell {
            x: cell.x.clamp(self.min_x, self.max_x.max(self.min_x)),
            y: cell.y.clamp(self.min_y, self.max_y.max(self.min_y)),
        }
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }

    pub const fn is_empty(&self) -> bool {
        self.max_x < self.min_x || self.max_y < self.min_y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(64, 32)
    }
}
