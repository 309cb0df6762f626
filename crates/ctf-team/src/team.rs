//! The `Team` session.

use tracing::{debug, info};

use ctf_agent::{Agent, Decision, Observation, TerminationReason};
use ctf_belief::SharedKnowledge;
use ctf_core::{EngineConfig, TeamColor, VisionWindow};
use ctf_nav::{AStarPathFinder, PathFinder};

use crate::{NoopObserver, TeamError, TeamObserver, TeamResult};

/// One team for one match.
///
/// Owns the [`SharedKnowledge`] every agent reads and writes, and the agents
/// themselves.  The host calls [`decide`][Self::decide] once per agent per
/// tick, in any order; each call borrows the knowledge exclusively, so
/// updates are sequential and the last writer wins.
///
/// Create via [`TeamBuilder`][crate::TeamBuilder].
pub struct Team<P = AStarPathFinder> {
    pub(crate) color:      TeamColor,
    pub(crate) config:     EngineConfig,
    pub(crate) knowledge:  SharedKnowledge,
    pub(crate) agents:     Vec<Agent<P>>,
    pub(crate) terminated: Option<TerminationReason>,
}

impl<P: PathFinder> Team<P> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn color(&self) -> TeamColor {
        self.color
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn knowledge(&self) -> &SharedKnowledge {
        &self.knowledge
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn agent(&self, index: usize) -> Option<&Agent<P>> {
        self.agents.get(index)
    }

    /// `Some(reason)` once [`terminate`][Self::terminate] has been called.
    pub fn termination(&self) -> Option<TerminationReason> {
        self.terminated
    }

    /// Parse glyph rows with this team's colour and the configured symbols.
    pub fn parse_window<S: AsRef<str>>(&self, rows: &[S]) -> TeamResult<VisionWindow> {
        Ok(VisionWindow::from_rows(rows, self.color, &self.config.symbols)?)
    }

    // ── Per-tick call ─────────────────────────────────────────────────────

    /// Decide for agent `index` without an observer.
    pub fn decide(&mut self, index: usize, obs: &Observation<'_>) -> TeamResult<Decision> {
        self.decide_observed(index, obs, &mut NoopObserver)
    }

    /// Decide for agent `index`, reporting to `observer`.
    ///
    /// # Errors
    ///
    /// - [`TeamError::Terminated`] after [`terminate`][Self::terminate].
    /// - [`TeamError::AgentNotFound`] for an index outside the team.
    /// - [`TeamError::VisionRange`] when the window's range differs from
    ///   `config.vision_range`.
    pub fn decide_observed<O: TeamObserver>(
        &mut self,
        index:    usize,
        obs:      &Observation<'_>,
        observer: &mut O,
    ) -> TeamResult<Decision> {
        if let Some(reason) = self.terminated {
            return Err(TeamError::Terminated(reason));
        }
        let count = self.agents.len();
        let agent = self
            .agents
            .get_mut(index)
            .ok_or(TeamError::AgentNotFound { index, count })?;
        if obs.window.range() != self.config.vision_range {
            return Err(TeamError::VisionRange {
                expected: self.config.vision_range,
                got:      obs.window.range(),
            });
        }

        let enemy_before = self.knowledge.enemy_flag;
        let home_before = self.knowledge.home_flag;

        let decision = agent.decide(obs, &mut self.knowledge);

        if let Some(cell) = self.knowledge.enemy_flag.filter(|&c| Some(c) != enemy_before) {
            observer.on_enemy_flag(index, cell);
        }
        if let Some(cell) = self.knowledge.home_flag.filter(|&c| Some(c) != home_before) {
            observer.on_home_flag(index, cell);
        }
        observer.on_decision(index, agent.role(), obs.position, &decision);
        Ok(decision)
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// End the match: clear every agent's memory and the shared knowledge.
    /// Later calls to [`decide`][Self::decide] are rejected.
    pub fn terminate(&mut self, reason: TerminationReason) -> TeamResult<()> {
        self.terminate_observed(reason, &mut NoopObserver)
    }

    pub fn terminate_observed<O: TeamObserver>(
        &mut self,
        reason:   TerminationReason,
        observer: &mut O,
    ) -> TeamResult<()> {
        if let Some(previous) = self.terminated {
            return Err(TeamError::Terminated(previous));
        }
        for agent in &mut self.agents {
            agent.terminate(reason);
        }
        debug!(known = self.knowledge.map.len(), "discarding shared knowledge");
        self.knowledge.reset();
        self.terminated = Some(reason);
        info!(color = ?self.color, %reason, "team terminated");
        observer.on_terminate(reason);
        Ok(())
    }
}
