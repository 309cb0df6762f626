//! The square vision window handed to an agent every tick.
//!
//! # Coordinates
//!
//! A window of range `R` has side `2R + 1` and the observing agent sits at
//! window coordinate `(R, R)`.  Most callers work in *offsets* `(dx, dy)`
//! relative to the agent, which map to world space by adding the agent's
//! absolute position:
//!
//! ```text
//! world = position + (vx - R, vy - R)
//! ```

use crate::{Cell, CoreError, CoreResult, TeamColor, Tile, TileSymbols};

/// Row-major grid of classified tiles centred on the observing agent.
///
/// Deserializing goes through [`VisionWindow::new`], so a tile buffer of the
/// wrong length is rejected instead of stored.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWindow"))]
pub struct VisionWindow {
    range: u32,
    tiles: Vec<Tile>,
}

/// Unchecked wire form of [`VisionWindow`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWindow {
    range: u32,
    tiles: Vec<Tile>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWindow> for VisionWindow {
    type Error = CoreError;

    fn try_from(raw: RawWindow) -> CoreResult<Self> {
        VisionWindow::new(raw.range, raw.tiles)
    }
}

impl VisionWindow {
    /// Wrap an already-classified row-major tile buffer.
    ///
    /// # Errors
    ///
    /// [`CoreError::WindowSize`] when `tiles.len() != (2R + 1)²`.
    pub fn new(range: u32, tiles: Vec<Tile>) -> CoreResult<Self> {
        let side = 2 * range as usize + 1;
        let expected = side.checked_mul(side).unwrap_or(usize::MAX);
        if tiles.len() != expected {
            return Err(CoreError::WindowSize { range, expected, got: tiles.len() });
        }
        Ok(Self { range, tiles })
    }

    /// A window with nothing visible except the agent's own (empty) cell.
    /// This is what an agent sees before any light reaches it.
    pub fn fog(range: u32) -> Self {
        let side = 2 * range as usize + 1;
        let mut tiles = vec![Tile::Unknown; side * side];
        tiles[range as usize * side + range as usize] = Tile::Empty;
        Self { range, tiles }
    }

    /// Parse glyph rows (as printed by an ASCII host engine) from the point of
    /// view of `team`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::EvenSide`] if the row count is even.
    /// - [`CoreError::RaggedRow`] if any row's length differs from the row count.
    /// - [`CoreError::UnknownSymbol`] for glyphs missing from `symbols`.
    pub fn from_rows<S: AsRef<str>>(
        rows:    &[S],
        team:    TeamColor,
        symbols: &TileSymbols,
    ) -> CoreResult<Self> {
        let side = rows.len();
        if side % 2 == 0 {
            return Err(CoreError::EvenSide(side));
        }
        let mut tiles = Vec::with_capacity(side * side);
        for (row, line) in rows.iter().enumerate() {
            let before = tiles.len();
            for (col, symbol) in line.as_ref().chars().enumerate() {
                let tile = symbols
                    .classify(symbol, team)
                    .ok_or(CoreError::UnknownSymbol { symbol, row, col })?;
                tiles.push(tile);
            }
            let got = tiles.len() - before;
            if got != side {
                return Err(CoreError::RaggedRow { row, expected: side, got });
            }
        }
        Ok(Self { range: (side / 2) as u32, tiles })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn range(&self) -> u32 {
        self.range
    }

    #[inline]
    pub fn side(&self) -> usize {
        2 * self.range as usize + 1
    }

    /// Window coordinate of the observing agent (same on both axes).
    #[inline]
    pub fn center(&self) -> usize {
        self.range as usize
    }

    // ── Access ────────────────────────────────────────────────────────────

    /// Tile at window coordinate `(vx, vy)`.
    #[inline]
    pub fn get(&self, vx: usize, vy: usize) -> Option<Tile> {
        let side = self.side();
        if vx >= side || vy >= side {
            return None;
        }
        Some(self.tiles[vy * side + vx])
    }

    /// Tile at offset `(dx, dy)` from the agent, or `None` outside the window.
    #[inline]
    pub fn at_offset(&self, dx: i32, dy: i32) -> Option<Tile> {
        let r = self.range as i32;
        if dx.abs() > r || dy.abs() > r {
            return None;
        }
        self.get((dx + r) as usize, (dy + r) as usize)
    }

    /// Overwrite the tile at offset `(dx, dy)`.  Offsets outside the window
    /// are ignored.
    pub fn set(&mut self, dx: i32, dy: i32, tile: Tile) {
        let r = self.range as i32;
        if dx.abs() > r || dy.abs() > r {
            return;
        }
        let side = self.side();
        self.tiles[(dy + r) as usize * side + (dx + r) as usize] = tile;
    }

    /// Iterator over `(dx, dy, tile)` for every cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Tile)> + '_ {
        let side = self.side();
        let r = self.range as i32;
        self.tiles.iter().enumerate().map(move |(i, &t)| {
            let vx = (i % side) as i32;
            let vy = (i / side) as i32;
            (vx - r, vy - r, t)
        })
    }

    /// Absolute cell for offset `(dx, dy)` given the agent's `position`.
    #[inline]
    pub fn to_world(position: Cell, dx: i32, dy: i32) -> Cell {
        position.offset(dx, dy)
    }
}
