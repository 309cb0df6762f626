//! What an agent hands back to the host each tick, and why.

use std::fmt;

use ctf_core::{Cell, Direction};

/// The host-facing output of one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "direction", rename_all = "snake_case"))]
pub enum Action {
    Move(Direction),
    Shoot(Direction),
    Noop,
}

impl Action {
    /// `"move"`, `"shoot"` or `"none"`.
    pub const fn kind(self) -> &'static str {
        match self {
            Action::Move(_)  => "move",
            Action::Shoot(_) => "shoot",
            Action::Noop     => "none",
        }
    }

    pub const fn direction(self) -> Option<Direction> {
        match self {
            Action::Move(d) | Action::Shoot(d) => Some(d),
            Action::Noop => None,
        }
    }

    /// Cell a move from `position` tries to enter.  `None` for shots and
    /// no-ops, which never bump.
    pub fn move_target(self, position: Cell) -> Option<Cell> {
        match self {
            Action::Move(d) => Some(position.step(d)),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction() {
            Some(d) => write!(f, "{} {d}", self.kind()),
            None    => f.write_str(self.kind()),
        }
    }
}

/// Which branch of the dispatcher produced an action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DecisionReason {
    /// Critical health or ammo; pathing to the home flag.
    Retreat,
    /// Critical, but home is unknown or unreachable; stepping homeward locally.
    RetreatLocal,
    /// Objective role pathing to the enemy flag.
    SeekFlag,
    /// Objective role carrying the flag back home.
    ReturnFlag,
    /// Standing on the goal already.
    AtGoal,
    /// Path search failed; greedy step toward the goal.
    GreedyFallback,
    /// Greedy step blocked too; any open direction.
    AnyOpen,
    /// Aligned hostile with a clear line.
    Engage,
    /// Pathing toward the nearest visible hostile.
    Chase,
    /// Chase path failed; greedy step toward the hostile.
    ChaseGreedy,
    /// Support role pathing to the enemy flag.
    Assist,
    /// Heading for a frontier cell.
    ExploreFrontier,
    /// No frontier yet; heading for the projected forward target.
    ExploreForward,
    /// Exploration target unreachable; stepping by the exploration order.
    ExploreLocal,
    /// Every direction is closed.
    Immobilized,
}

/// An action together with the reason it was chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub action: Action,
    pub reason: DecisionReason,
}

impl Decision {
    pub const fn new(action: Action, reason: DecisionReason) -> Self {
        Self { action, reason }
    }

    pub const fn moving(direction: Direction, reason: DecisionReason) -> Self {
        Self::new(Action::Move(direction), reason)
    }

    pub const fn idle(reason: DecisionReason) -> Self {
        Self::new(Action::Noop, reason)
    }
}

/// Why the host ended an agent's match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TerminationReason {
    Victory,
    Defeat,
    Draw,
    /// The match ran out of ticks.
    TimeLimit,
    /// The agent was killed and will not respawn.
    Eliminated,
    /// The host shut down mid-match.
    Aborted,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TerminationReason::Victory    => "victory",
            TerminationReason::Defeat     => "defeat",
            TerminationReason::Draw       => "draw",
            TerminationReason::TimeLimit  => "time limit",
            TerminationReason::Eliminated => "eliminated",
            TerminationReason::Aborted    => "aborted",
        })
    }
}
