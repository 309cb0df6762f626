//! The role dispatcher.
//!
//! # Priority order
//!
//! | Step | Condition                         | Chain                                              |
//! |------|-----------------------------------|----------------------------------------------------|
//! | 1    | always                            | bump check, then fold vision into shared knowledge |
//! | 2    | hp or ammo critical               | path home → homeward local step → no-op            |
//! | 3a   | objective, goal known             | path → greedy → any open → no-op                   |
//! | 3b   | objective, no goal                | engage → chase → explore                           |
//! | 3c   | support                           | engage → chase → assist → explore                  |
//!
//! The objective's goal is the home flag while carrying the enemy flag and
//! the enemy flag otherwise.  With no goal the carrier explores toward home
//! and everyone else toward the enemy half.
//!
//! # Loop avoidance
//!
//! Cells the agent failed to enter since it last moved are passed to search
//! as impassable and closed in every local fallback.  On top of that,
//! [`AntiLoop::RecencyPenalty`] makes search pay extra for recently visited
//! cells, and [`AntiLoop::EscapeOrdering`] tries the perpendicular
//! directions first in local fallbacks right after a bump.

use tracing::{debug, warn};

use ctf_belief::{AgentMemory, BeliefMap, BumpLearner, SharedKnowledge};
use ctf_combat::EngagementEvaluator;
use ctf_core::{AntiLoop, Cell, Direction, EngineConfig, TeamColor};
use ctf_nav::{
    AStarPathFinder, CostTable, FrontierSelector, LocalView, NextStep, PathFinder, PathQuery,
    TargetKind, escape_order,
};

use crate::{Action, Decision, DecisionReason, Observation, Role, TerminationReason};

/// One agent: its role, its private memory, and the search it plans with.
///
/// The shared knowledge is not stored here; the team session lends it to
/// [`decide`][Self::decide] each tick.
#[derive(Clone, Debug)]
pub struct Agent<P = AStarPathFinder> {
    index:    usize,
    team:     TeamColor,
    role:     Role,
    config:   EngineConfig,
    costs:    CostTable,
    frontier: FrontierSelector,
    finder:   P,
    memory:   AgentMemory,
}

impl Agent<AStarPathFinder> {
    pub fn new(index: usize, team: TeamColor, role: Role, config: &EngineConfig) -> Self {
        Self::with_finder(index, team, role, config, AStarPathFinder)
    }
}

impl<P: PathFinder> Agent<P> {
    pub fn with_finder(
        index:  usize,
        team:   TeamColor,
        role:   Role,
        config: &EngineConfig,
        finder: P,
    ) -> Self {
        Self {
            index,
            team,
            role,
            config:   config.clone(),
            costs:    CostTable::from_tuning(&config.nav),
            frontier: FrontierSelector::new(config.explore, config.bounds),
            finder,
            memory:   AgentMemory::new(config.nav.history_len, config.nav.max_blocked),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn team(&self) -> TeamColor {
        self.team
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn memory(&self) -> &AgentMemory {
        &self.memory
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Run one tick.
    ///
    /// Updates `knowledge` from the observation, picks an action, and
    /// remembers the cell a move will try to enter so next tick's bump check
    /// can tell whether it succeeded.
    pub fn decide(&mut self, obs: &Observation<'_>, knowledge: &mut SharedKnowledge) -> Decision {
        BumpLearner::check(&mut self.memory, obs.window, obs.position, &mut knowledge.map);
        knowledge.observe(obs.window, obs.position);
        knowledge.publish_position(self.index, obs.position);

        let decision = if self.config.survival.is_critical(obs.hp, obs.ammo) {
            self.retreat(obs, knowledge)
        } else {
            match self.role {
                Role::Objective => self.objective(obs, knowledge),
                Role::Support   => self.support(obs, knowledge),
            }
        };

        self.memory.record(obs.position, decision.action.move_target(obs.position));

        if decision.reason == DecisionReason::Immobilized {
            warn!(agent = self.index, position = %obs.position, "every direction closed; idling");
        } else {
            debug!(
                agent    = self.index,
                role     = %self.role,
                position = %obs.position,
                action   = %decision.action,
                reason   = ?decision.reason,
                "decided",
            );
        }
        decision
    }

    /// Match over: forget everything this agent remembers.
    pub fn terminate(&mut self, reason: TerminationReason) {
        debug!(agent = self.index, %reason, "agent terminated");
        self.memory.reset();
    }

    // ── Role chains ───────────────────────────────────────────────────────

    fn retreat(&self, obs: &Observation<'_>, k: &SharedKnowledge) -> Decision {
        if let Some(home) = k.home_flag {
            match self.route(obs, &k.map, home, self.config.nav.caps.retreat) {
                NextStep::AtGoal => return Decision::idle(DecisionReason::AtGoal),
                step => {
                    if let Some(dir) = step.direction_from(obs.position) {
                        return Decision::moving(dir, DecisionReason::Retreat);
                    }
                }
            }
        }

        let order = dedup(&[
            self.team.home_direction(),
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]);
        match self.local(obs).first_open(&self.fallback_order(&order)) {
            Some(dir) => Decision::moving(dir, DecisionReason::RetreatLocal),
            None      => Decision::idle(DecisionReason::Immobilized),
        }
    }

    fn objective(&self, obs: &Observation<'_>, k: &SharedKnowledge) -> Decision {
        let (goal, reason) = if obs.holding_flag {
            (k.home_flag, DecisionReason::ReturnFlag)
        } else {
            (k.enemy_flag, DecisionReason::SeekFlag)
        };

        let Some(goal) = goal else {
            if let Some(d) = self.engage_or_chase(obs, &k.map, self.config.nav.caps.objective_chase) {
                return d;
            }
            let advance = if obs.holding_flag {
                self.team.home_direction()
            } else {
                self.team.attack_direction()
            };
            return self.explore(obs, &k.map, advance);
        };

        let step = self.route(obs, &k.map, goal, self.config.nav.caps.objective);
        if step == NextStep::AtGoal {
            return Decision::idle(DecisionReason::AtGoal);
        }
        if let Some(dir) = step.direction_from(obs.position) {
            return Decision::moving(dir, reason);
        }

        let local = self.local(obs);
        if let Some(dir) = local.greedy_toward(goal) {
            return Decision::moving(dir, DecisionReason::GreedyFallback);
        }
        match local.first_open(&self.fallback_order(&Direction::ALL)) {
            Some(dir) => Decision::moving(dir, DecisionReason::AnyOpen),
            None      => Decision::idle(DecisionReason::Immobilized),
        }
    }

    fn support(&self, obs: &Observation<'_>, k: &SharedKnowledge) -> Decision {
        if let Some(d) = self.engage_or_chase(obs, &k.map, self.config.nav.caps.support_chase) {
            return d;
        }
        // Standing on the flag or unable to reach it both fall through.
        if let Some(flag) = k.enemy_flag {
            let step = self.route(obs, &k.map, flag, self.config.nav.caps.assist);
            if let Some(dir) = step.direction_from(obs.position) {
                return Decision::moving(dir, DecisionReason::Assist);
            }
        }
        self.explore(obs, &k.map, self.team.attack_direction())
    }

    // ── Shared building blocks ────────────────────────────────────────────

    /// Shoot an aligned hostile, else close in on the nearest visible one.
    fn engage_or_chase(&self, obs: &Observation<'_>, map: &BeliefMap, cap: usize) -> Option<Decision> {
        if let Some(fire) = EngagementEvaluator::evaluate(obs.window, obs.can_shoot, obs.ammo) {
            return Some(Decision::new(Action::Shoot(fire.direction), DecisionReason::Engage));
        }

        let hostile = EngagementEvaluator::nearest_hostile(obs.window)?;
        let target = hostile.cell(obs.position);
        if let Some(dir) = self.route(obs, map, target, cap).direction_from(obs.position) {
            return Some(Decision::moving(dir, DecisionReason::Chase));
        }
        self.local(obs)
            .greedy_toward(target)
            .map(|dir| Decision::moving(dir, DecisionReason::ChaseGreedy))
    }

    fn explore(&self, obs: &Observation<'_>, map: &BeliefMap, advance: Direction) -> Decision {
        let target = self.frontier.select(map, obs.position, advance, self.index, &self.memory);
        let reason = match target.kind {
            TargetKind::Frontier   => DecisionReason::ExploreFrontier,
            TargetKind::Projection => DecisionReason::ExploreForward,
        };

        let step = self.route(obs, map, target.cell, self.config.nav.caps.explore);
        if let Some(dir) = step.direction_from(obs.position) {
            return Decision::moving(dir, reason);
        }

        let local = self.local(obs);
        if let Some(dir) = local.greedy_toward(target.cell) {
            return Decision::moving(dir, DecisionReason::ExploreLocal);
        }
        let [left, right] = advance.perpendicular();
        let order = dedup(&[advance, left, right, advance.opposite()]);
        match local.first_open(&self.fallback_order(&order)) {
            Some(dir) => Decision::moving(dir, DecisionReason::ExploreLocal),
            None      => Decision::idle(DecisionReason::Immobilized),
        }
    }

    fn route(&self, obs: &Observation<'_>, map: &BeliefMap, goal: Cell, cap: usize) -> NextStep {
        let recent: Vec<Cell> = match self.config.nav.anti_loop {
            AntiLoop::RecencyPenalty => self.memory.history().collect(),
            AntiLoop::EscapeOrdering => Vec::new(),
        };
        let query = PathQuery::new(obs.position, Some(goal), self.config.bounds, self.costs)
            .with_cap(cap)
            .avoiding(self.memory.blocked())
            .penalizing(&recent);
        self.finder.next_step(&query, map)
    }

    fn local<'s>(&'s self, obs: &Observation<'s>) -> LocalView<'s> {
        LocalView::new(obs.window, obs.position, self.config.bounds, self.memory.blocked())
    }

    fn fallback_order(&self, order: &[Direction]) -> Vec<Direction> {
        match (self.config.nav.anti_loop, self.memory.failed_direction()) {
            (AntiLoop::EscapeOrdering, Some(failed)) => escape_order(order, failed),
            _ => order.to_vec(),
        }
    }
}

/// `order` with repeats removed, first occurrence kept.
fn dedup(order: &[Direction]) -> Vec<Direction> {
    let mut out = Vec::with_capacity(order.len());
    for &d in order {
        if !out.contains(&d) {
            out.push(d);
        }
    }
    out
}
