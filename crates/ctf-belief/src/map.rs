//! The belief map: last-known terrain for every cell a teammate has seen.

use rustc_hash::FxHashMap;

use ctf_core::{Cell, Terrain, Tile, VisionWindow};

/// Sparse `Cell → Terrain` map.  Cells never stored read as
/// [`Terrain::Unknown`]; `Unknown` itself is never stored.
///
/// Writes come from two sources: direct observation
/// ([`observe`][Self::observe]) and inference ([`mark_wall`][Self::mark_wall]).
///
/// # Inferred walls
///
/// An inferred wall is one vision cannot see: the tile looked walkable when
/// the move into it failed.  The map keeps that tile as the wall's
/// *reading*.  Seeing the same reading again confirms nothing, so the wall
/// stays.  It is lifted only when
///
/// - a later observation shows a different known tile there (the unit that
///   stood in the way left, a real wall appeared, ...), or
/// - an agent observes from inside the cell, which proves it walkable.
///
/// Fog never lifts an inferred wall.
#[derive(Clone, Debug, Default)]
pub struct BeliefMap {
    cells:    FxHashMap<Cell, Terrain>,
    /// Inferred walls and the tile vision showed when the move failed.
    inferred: FxHashMap<Cell, Tile>,
}

impl BeliefMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last-known terrain at `cell`.
    #[inline]
    pub fn get(&self, cell: Cell) -> Terrain {
        self.cells.get(&cell).copied().unwrap_or(Terrain::Unknown)
    }

    #[inline]
    pub fn is_known(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Number of known cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Every known cell, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Terrain)> + '_ {
        self.cells.iter().map(|(&c, &t)| (c, t))
    }

    /// `true` while `cell` holds a wall inferred from a failed move.
    #[inline]
    pub fn is_inferred(&self, cell: Cell) -> bool {
        self.inferred.contains_key(&cell)
    }

    /// Number of inferred walls still standing.
    pub fn inferred_count(&self) -> usize {
        self.inferred.len()
    }

    /// Record a direct observation.  Writing `Unknown` is a no-op; anything
    /// else replaces an inferred wall.
    pub fn set(&mut self, cell: Cell, terrain: Terrain) {
        if terrain.is_known() {
            self.inferred.remove(&cell);
            self.cells.insert(cell, terrain);
        }
    }

    /// Infer an obstacle at `cell`, which vision currently shows as
    /// `reading`.  Returns `true` if the map changed.
    pub fn mark_wall(&mut self, cell: Cell, reading: Tile) -> bool {
        if reading.is_wall() {
            self.inferred.remove(&cell);
        } else {
            self.inferred.insert(cell, reading);
        }
        let previous = self.cells.insert(cell, Terrain::Wall);
        previous != Some(Terrain::Wall)
    }

    /// Fold a vision window seen from `position` into the map.
    ///
    /// Returns the number of cells written.  Unknown tiles are skipped so
    /// earlier knowledge survives fog, and an inferred wall is skipped while
    /// vision repeats the reading it was inferred under.
    pub fn observe(&mut self, window: &VisionWindow, position: Cell) -> usize {
        // Standing in a cell proves it walkable.
        self.inferred.remove(&position);

        let mut written = 0;
        for (dx, dy, tile) in window.iter() {
            let terrain = tile.terrain();
            if !terrain.is_known() {
                continue;
            }
            let cell = VisionWindow::to_world(position, dx, dy);
            if let Some(&reading) = self.inferred.get(&cell) {
                if reading == tile {
                    continue;
                }
                self.inferred.remove(&cell);
            }
            self.cells.insert(cell, terrain);
            written += 1;
        }
        written
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.inferred.clear();
    }
}
