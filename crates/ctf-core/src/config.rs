//! Engine configuration.
//!
//! The host supplies vision range, playable bounds, and glyphs; everything
//! else is tuning.  [`EngineConfig::default`] reproduces the constants the
//! engine was calibrated with.
//!
//! # Loading
//!
//! With the `toml` feature:
//!
//! ```rust,ignore
//! let config = EngineConfig::from_toml_str(r#"
//!     vision_range = 4
//!     [bounds]
//!     min_x = 0
//!     min_y = 0
//!     max_x = 39
//!     max_y = 19
//!     [nav.cost_model]
//!     kind = "uniform"
//! "#)?;
//! ```
//!
//! Omitted sections fall back to their defaults.

use crate::{Bounds, CoreError, CoreResult, TileSymbols};

// ── Strategies ────────────────────────────────────────────────────────────────

/// How path search prices cells nobody has seen yet.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CostModel {
    /// Unknown cells cost `factor ×` a known-empty step.  Search prefers
    /// confirmed routes but still crosses fog when nothing better exists.
    UnknownPenalty { factor: u32 },
    /// Unknown cells cost the same as known floor (optimistic).
    Uniform,
}

/// How an agent keeps itself from oscillating or re-trying a blocked move.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AntiLoop {
    /// Recently visited cells cost extra during path search.
    RecencyPenalty,
    /// After a failed move, local fallbacks try the perpendicular directions
    /// before anything else.
    EscapeOrdering,
}

// ── Sections ──────────────────────────────────────────────────────────────────

/// Node-expansion caps for each kind of path query.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExpansionCaps {
    /// Objective role heading for a flag.
    pub objective:       usize,
    /// Objective role chasing a visible hostile while no flag is known.
    pub objective_chase: usize,
    /// Support role chasing a visible hostile.
    pub support_chase:   usize,
    /// Support role heading for the enemy flag.
    pub assist:          usize,
    /// Survival retreat toward home.
    pub retreat:         usize,
    /// Heading for an exploration target.
    pub explore:         usize,
}

impl Default for ExpansionCaps {
    fn default() -> Self {
        Self {
            objective:       20_000,
            objective_chase: 3_000,
            support_chase:   2_000,
            assist:          3_000,
            retreat:         5_000,
            explore:         5_000,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavTuning {
    pub cost_model:     CostModel,
    pub anti_loop:      AntiLoop,
    /// Cost of one step onto known floor.  Every other cost is a multiple.
    pub base_step_cost: u32,
    /// Extra cost for entering a recently visited cell
    /// (only with [`AntiLoop::RecencyPenalty`]).
    pub revisit_cost:   u32,
    /// How many recent positions an agent remembers.
    pub history_len:    usize,
    /// How many failed targets an agent avoids before giving up and idling.
    pub max_blocked:    usize,
    pub caps:           ExpansionCaps,
}

impl Default for NavTuning {
    fn default() -> Self {
        Self {
            cost_model:     CostModel::UnknownPenalty { factor: 4 },
            anti_loop:      AntiLoop::RecencyPenalty,
            base_step_cost: 10,
            revisit_cost:   5,
            history_len:    8,
            max_blocked:    4,
            caps:           ExpansionCaps::default(),
        }
    }
}

/// Frontier scoring and the no-frontier forward push.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExploreTuning {
    /// Score reduction per cell of progress in the advance direction.
    pub advance_weight:      i64,
    /// Score added to frontier cells the agent visited recently.
    pub revisit_penalty:     i64,
    /// How far ahead the forward push projects its target.
    pub projection_distance: i32,
    /// Perpendicular spacing between teammates' forward pushes.
    pub fan_out_spread:      i32,
}

impl Default for ExploreTuning {
    fn default() -> Self {
        Self {
            advance_weight:      2,
            revisit_penalty:     8,
            projection_distance: 8,
            fan_out_spread:      2,
        }
    }
}

/// Health and ammunition levels at or below which an agent retreats.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SurvivalThresholds {
    pub critical_hp:   u32,
    pub critical_ammo: u32,
}

impl Default for SurvivalThresholds {
    fn default() -> Self {
        Self { critical_hp: 1, critical_ammo: 0 }
    }
}

impl SurvivalThresholds {
    #[inline]
    pub fn is_critical(&self, hp: u32, ammo: u32) -> bool {
        hp <= self.critical_hp || ammo <= self.critical_ammo
    }
}

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Top-level configuration shared read-only by every agent of a team.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Vision range `R`; windows have side `2R + 1`.
    pub vision_range:    u32,
    /// Playable rectangle.
    pub bounds:          Bounds,
    /// Host glyph table.
    pub symbols:         TileSymbols,
    /// Index of the agent that plays the objective role.
    pub objective_index: usize,
    pub survival:        SurvivalThresholds,
    pub nav:             NavTuning,
    pub explore:         ExploreTuning,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            vision_range:    4,
            bounds:          Bounds::default(),
            symbols:         TileSymbols::default(),
            objective_index: 0,
            survival:        SurvivalThresholds::default(),
            nav:             NavTuning::default(),
            explore:         ExploreTuning::default(),
        }
    }
}

impl EngineConfig {
    /// Check internal consistency.
    ///
    /// # Errors
    ///
    /// [`CoreError::Config`] naming the first offending field.
    pub fn validate(&self) -> CoreResult<()> {
        let fail = |msg: &str| Err(CoreError::Config(msg.to_owned()));

        if self.vision_range == 0 {
            return fail("vision_range must be at least 1");
        }
        if self.bounds.is_empty() {
            return fail("bounds must contain at least one cell");
        }
        if self.nav.base_step_cost == 0 {
            return fail("nav.base_step_cost must be positive");
        }
        if let CostModel::UnknownPenalty { factor } = self.nav.cost_model {
            if factor == 0 {
                return fail("nav.cost_model.factor must be positive");
            }
        }
        if self.nav.history_len == 0 {
            return fail("nav.history_len must be positive");
        }
        if self.nav.max_blocked == 0 {
            return fail("nav.max_blocked must be positive");
        }
        let caps = &self.nav.caps;
        if [caps.objective, caps.objective_chase, caps.support_chase, caps.assist, caps.retreat, caps.explore]
            .contains(&0)
        {
            return fail("nav.caps entries must be positive");
        }
        if self.explore.projection_distance <= 0 {
            return fail("explore.projection_distance must be positive");
        }
        if self.explore.fan_out_spread < 0 {
            return fail("explore.fan_out_spread must not be negative");
        }
        Ok(())
    }

    /// Parse and validate a TOML document.  Missing keys take their defaults.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> CoreResult<Self> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
