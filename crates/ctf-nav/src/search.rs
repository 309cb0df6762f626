//! Path search trait and the Dijkstra / A* implementations.
//!
//! # Pluggability
//!
//! The dispatcher calls search through the [`PathFinder`] trait, so the
//! algorithm is chosen at compile time by the agent's type parameter.  Both
//! shipped implementations share one weighted best-first search; A* adds the
//! Manhattan heuristic (scaled by the base step cost, which keeps it
//! admissible because no step is cheaper than that).
//!
//! # Determinism
//!
//! Heap entries carry a monotonically increasing sequence number assigned at
//! discovery.  Equal priorities therefore pop in discovery order, and
//! neighbours are discovered in [`Direction::ALL`] order, so identical inputs
//! always produce the identical step.
//!
//! # Output
//!
//! Only the first step of the best path is returned.  The engine re-plans
//! from scratch every tick, which keeps it correct while the belief map keeps
//! changing under it.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use ctf_belief::BeliefMap;
use ctf_core::{Bounds, Cell, Direction};

use crate::CostTable;

// ── Query & result ────────────────────────────────────────────────────────────

/// Everything one search needs besides the map.
#[derive(Clone, Debug)]
pub struct PathQuery<'a> {
    pub start:          Cell,
    /// `None` means the caller has nowhere to go.
    pub goal:           Option<Cell>,
    pub bounds:         Bounds,
    pub costs:          CostTable,
    /// Upper bound on expanded nodes.  Exceeding it yields
    /// [`NoPath::ExpansionCap`].
    pub max_expansions: usize,
    /// Cells that are impassable for this query only.
    pub avoid:          &'a [Cell],
    /// Cells that cost `costs.revisit` extra to enter.
    pub penalized:      &'a [Cell],
}

impl<'a> PathQuery<'a> {
    pub fn new(start: Cell, goal: Option<Cell>, bounds: Bounds, costs: CostTable) -> Self {
        Self {
            start,
            goal,
            bounds,
            costs,
            max_expansions: 20_000,
            avoid:          &[],
            penalized:      &[],
        }
    }

    pub fn with_cap(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    pub fn avoiding(mut self, cells: &'a [Cell]) -> Self {
        self.avoid = cells;
        self
    }

    pub fn penalizing(mut self, cells: &'a [Cell]) -> Self {
        self.penalized = cells;
        self
    }

    /// Cost of stepping into `cell`, or `None` if it is out of bounds, a
    /// known wall, or in the avoid list.
    #[inline]
    pub fn step_cost(&self, map: &BeliefMap, cell: Cell) -> Option<u32> {
        if !self.bounds.contains(cell) || self.avoid.contains(&cell) {
            return None;
        }
        let cost = self.costs.enter(map.get(cell))?;
        if self.penalized.contains(&cell) {
            Some(cost.saturating_add(self.costs.revisit))
        } else {
            Some(cost)
        }
    }
}

/// Why a search produced no step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoPath {
    /// The query had no goal.
    NoGoal,
    /// The goal cannot be reached through passable cells.
    Unreachable,
    /// The search gave up after `max_expansions` nodes.
    ExpansionCap,
}

/// Outcome of a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NextStep {
    /// Step into this (4-adjacent) cell.
    Step(Cell),
    /// Start and goal coincide; no movement needed.
    AtGoal,
    NoPath(NoPath),
}

impl NextStep {
    pub fn cell(self) -> Option<Cell> {
        match self {
            NextStep::Step(c) => Some(c),
            _ => None,
        }
    }

    /// Direction of the step as seen from `start`.
    pub fn direction_from(self, start: Cell) -> Option<Direction> {
        self.cell().and_then(|c| start.direction_to(c))
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable grid search.
///
/// # Contract
///
/// - `goal == None`            → `NoPath(NoGoal)`.
/// - `goal == start`           → `AtGoal`.
/// - otherwise a step into a passable, in-bounds neighbour of `start`, or
///   `NoPath(Unreachable | ExpansionCap)`.
///
/// Implementations must be deterministic.
pub trait PathFinder: Send + Sync {
    fn next_step(&self, query: &PathQuery<'_>, map: &BeliefMap) -> NextStep;
}

/// Uniform-cost search (no heuristic).
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraPathFinder;

impl PathFinder for DijkstraPathFinder {
    fn next_step(&self, query: &PathQuery<'_>, map: &BeliefMap) -> NextStep {
        best_first(query, map, false)
    }
}

/// A* with the Manhattan heuristic.  Expands far fewer nodes than Dijkstra
/// toward a distant goal; returns a step on an equally cheap path.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStarPathFinder;

impl PathFinder for AStarPathFinder {
    fn next_step(&self, query: &PathQuery<'_>, map: &BeliefMap) -> NextStep {
        best_first(query, map, true)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

fn best_first(query: &PathQuery<'_>, map: &BeliefMap, use_heuristic: bool) -> NextStep {
    let Some(goal) = query.goal else {
        return NextStep::NoPath(NoPath::NoGoal);
    };
    let start = query.start;
    if start == goal {
        return NextStep::AtGoal;
    }
    if query.step_cost(map, goal).is_none() {
        return NextStep::NoPath(NoPath::Unreachable);
    }

    let h = |c: Cell| -> u32 {
        if use_heuristic { c.manhattan(goal).saturating_mul(query.costs.base) } else { 0 }
    };

    // best[c] = cheapest known cost from start to c.
    let mut best: FxHashMap<Cell, u32> = FxHashMap::default();
    // parent[c] = cell c was reached from on the cheapest known path.
    let mut parent: FxHashMap<Cell, Cell> = FxHashMap::default();

    // Min-heap on (priority, discovery sequence).  The sequence is unique, so
    // the trailing fields never take part in ordering.
    let mut heap: BinaryHeap<Reverse<(u32, u64, u32, Cell)>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    best.insert(start, 0);
    heap.push(Reverse((h(start), seq, 0, start)));

    let mut expanded = 0usize;
    while let Some(Reverse((_, _, cost, current))) = heap.pop() {
        if current == goal {
            trace!(%start, %goal, expanded, cost, "path found");
            return NextStep::Step(first_step(&parent, start, goal));
        }

        // Skip stale heap entries.
        if best.get(&current).is_some_and(|&b| cost > b) {
            continue;
        }

        expanded += 1;
        if expanded > query.max_expansions {
            debug!(%start, %goal, cap = query.max_expansions, "path search hit expansion cap");
            return NextStep::NoPath(NoPath::ExpansionCap);
        }

        for (_, next) in current.neighbors() {
            let Some(step) = query.step_cost(map, next) else {
                continue;
            };
            let new_cost = cost.saturating_add(step);
            if best.get(&next).is_none_or(|&b| new_cost < b) {
                best.insert(next, new_cost);
                parent.insert(next, current);
                seq += 1;
                heap.push(Reverse((new_cost.saturating_add(h(next)), seq, new_cost, next)));
            }
        }
    }

    trace!(%start, %goal, expanded, "goal unreachable");
    NextStep::NoPath(NoPath::Unreachable)
}

/// Walk `parent` back from `goal` to the cell adjacent to `start`.
fn first_step(parent: &FxHashMap<Cell, Cell>, start: Cell, goal: Cell) -> Cell {
    let mut cur = goal;
    while let Some(&prev) = parent.get(&cur) {
        if prev == start {
            return cur;
        }
        cur = prev;
    }
    cur
}
