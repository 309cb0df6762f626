//! Step costs.
//!
//! All costs are integers in units of [`NavTuning::base_step_cost`], so a
//! known-floor step with the default tuning costs 10, a step into fog 40, and
//! re-entering a recently visited cell adds 5.

use ctf_core::{CostModel, NavTuning, Terrain};

/// Prices for entering a cell, resolved once from the tuning.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CostTable {
    /// Known passable terrain.
    pub base:    u32,
    /// Terrain nobody on the team has seen.
    pub unknown: u32,
    /// Surcharge for cells in the agent's recent history.
    pub revisit: u32,
}

impl CostTable {
    pub fn from_tuning(tuning: &NavTuning) -> Self {
        let base = tuning.base_step_cost.max(1);
        let unknown = match tuning.cost_model {
            CostModel::UnknownPenalty { factor } => base.saturating_mul(factor.max(1)),
            CostModel::Uniform                   => base,
        };
        Self { base, unknown, revisit: tuning.revisit_cost }
    }

    /// Cost to enter terrain `t`, or `None` if it cannot be entered.
    #[inline]
    pub fn enter(&self, t: Terrain) -> Option<u32> {
        match t {
            Terrain::Wall    => None,
            Terrain::Unknown => Some(self.unknown),
            Terrain::Empty | Terrain::EnemyFlag | Terrain::HomeFlag => Some(self.base),
        }
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::from_tuning(&NavTuning::default())
    }
}
