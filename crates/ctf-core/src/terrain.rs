//! Tile and terrain classification.
//!
//! The host engine describes the world in glyphs.  [`TileSymbols`] turns a
//! glyph into a [`Tile`] from the point of view of one team, and
//! [`Tile::terrain`] folds the transient tiles (agents, projectiles) into the
//! structural [`Terrain`] stored in the belief map.

use crate::Direction;

// ── TeamColor ─────────────────────────────────────────────────────────────────

/// The side an agent plays for.  Determines which flag and which agent glyph
/// are hostile, and which way is "forward".
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TeamColor {
    Blue,
    Red,
}

impl TeamColor {
    pub const fn opponent(self) -> TeamColor {
        match self {
            TeamColor::Blue => TeamColor::Red,
            TeamColor::Red  => TeamColor::Blue,
        }
    }

    /// Direction of the enemy half: blue spawns on the left, red on the right.
    pub const fn attack_direction(self) -> Direction {
        match self {
            TeamColor::Blue => Direction::Right,
            TeamColor::Red  => Direction::Left,
        }
    }

    pub const fn home_direction(self) -> Direction {
        self.attack_direction().opposite()
    }
}

// ── Terrain ───────────────────────────────────────────────────────────────────

/// Structural classification stored in the belief map.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Wall,
    Empty,
    EnemyFlag,
    HomeFlag,
    Unknown,
}

impl Terrain {
    /// Known and walkable.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Terrain::Empty | Terrain::EnemyFlag | Terrain::HomeFlag)
    }

    #[inline]
    pub const fn is_known(self) -> bool {
        !matches!(self, Terrain::Unknown)
    }
}

// ── Tile ──────────────────────────────────────────────────────────────────────

/// One cell of a vision window, classified relative to the observing team.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Unknown,
    Empty,
    Wall,
    EnemyFlag,
    HomeFlag,
    Teammate,
    Hostile,
    Projectile,
}

impl Tile {
    /// Structural terrain for navigation.  Agents and projectiles are
    /// transient and fold into [`Terrain::Empty`].
    #[inline]
    pub const fn terrain(self) -> Terrain {
        match self {
            Tile::Unknown   => Terrain::Unknown,
            Tile::Wall      => Terrain::Wall,
            Tile::EnemyFlag => Terrain::EnemyFlag,
            Tile::HomeFlag  => Terrain::HomeFlag,
            Tile::Empty | Tile::Teammate | Tile::Hostile | Tile::Projectile => Terrain::Empty,
        }
    }

    #[inline]
    pub const fn is_hostile(self) -> bool {
        matches!(self, Tile::Hostile)
    }

    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }
}

// ── TileSymbols ───────────────────────────────────────────────────────────────

/// Glyph table supplied by the host engine.
///
/// Agent glyphs are matched case-insensitively (the engine upper-cases an
/// agent that carries a flag); every other glyph must match exactly.  Flags
/// are checked before agents so an upper-case flag glyph never reads as an
/// agent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TileSymbols {
    pub wall:       char,
    pub empty:      char,
    pub unknown:    char,
    pub blue_flag:  char,
    pub red_flag:   char,
    pub blue_agent: char,
    pub red_agent:  char,
    pub projectile: char,
}

impl Default for TileSymbols {
    fn default() -> Self {
        Self {
            wall:       '#',
            empty:      '.',
            unknown:    '?',
            blue_flag:  'B',
            red_flag:   'R',
            blue_agent: 'b',
            red_agent:  'r',
            projectile: '*',
        }
    }
}

impl TileSymbols {
    fn flag_of(&self, team: TeamColor) -> char {
        match team {
            TeamColor::Blue => self.blue_flag,
            TeamColor::Red  => self.red_flag,
        }
    }

    fn agent_of(&self, team: TeamColor) -> char {
        match team {
            TeamColor::Blue => self.blue_agent,
            TeamColor::Red  => self.red_agent,
        }
    }

    /// Classify `symbol` as seen by `team`.  Returns `None` for glyphs the
    /// table does not know.
    pub fn classify(&self, symbol: char, team: TeamColor) -> Option<Tile> {
        let tile = if symbol == self.wall {
            Tile::Wall
        } else if symbol == self.empty {
            Tile::Empty
        } else if symbol == self.unknown {
            Tile::Unknown
        } else if symbol == self.projectile {
            Tile::Projectile
        } else if symbol == self.flag_of(team) {
            Tile::HomeFlag
        } else if symbol == self.flag_of(team.opponent()) {
            Tile::EnemyFlag
        } else if symbol.eq_ignore_ascii_case(&self.agent_of(team.opponent())) {
            Tile::Hostile
        } else if symbol.eq_ignore_ascii_case(&self.agent_of(team)) {
            Tile::Teammate
        } else {
            return None;
        };
        Some(tile)
    }

    /// Like [`classify`][Self::classify] but unrecognised glyphs read as
    /// [`Tile::Unknown`].
    pub fn classify_lenient(&self, symbol: char, team: TeamColor) -> Tile {
        self.classify(symbol, team).unwrap_or(Tile::Unknown)
    }
}
