//! Unit tests for ctf-agent.
//!
//! Windows are drawn from Blue's side (`r` hostile, `R` enemy flag, `B` home
//! flag); the observing agent is the `b` in the centre.

#[cfg(test)]
mod helpers {
    use ctf_core::{Bounds, EngineConfig, TeamColor, TileSymbols, VisionWindow};

    pub fn window(rows: &[&str]) -> VisionWindow {
        VisionWindow::from_rows(rows, TeamColor::Blue, &TileSymbols::default()).unwrap()
    }

    /// 20 × 10 arena.
    pub fn config() -> EngineConfig {
        EngineConfig { bounds: Bounds::new(20, 10), ..EngineConfig::default() }
    }
}

// ── Action & roles ────────────────────────────────────────────────────────────

#[cfg(test)]
mod action_tests {
    use ctf_core::{Cell, Direction};

    use crate::{Action, Role, RoleAssignment, TerminationReason};

    #[test]
    fn kinds_and_targets() {
        let here = Cell::new(3, 3);
        assert_eq!(Action::Move(Direction::Up).kind(), "move");
        assert_eq!(Action::Shoot(Direction::Up).kind(), "shoot");
        assert_eq!(Action::Noop.kind(), "none");
        assert_eq!(Action::Move(Direction::Up).move_target(here), Some(Cell::new(3, 2)));
        assert_eq!(Action::Shoot(Direction::Up).move_target(here), None);
        assert_eq!(Action::Noop.direction(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Action::Move(Direction::Left).to_string(), "move left");
        assert_eq!(Action::Noop.to_string(), "none");
        assert_eq!(TerminationReason::TimeLimit.to_string(), "time limit");
    }

    #[test]
    fn exactly_one_objective() {
        let roles = RoleAssignment::new(0);
        assert_eq!(roles.role_of(0), Role::Objective);
        assert_eq!(roles.role_of(1), Role::Support);
        assert_eq!(roles.role_of(2), Role::Support);
        assert_eq!(RoleAssignment::new(2).role_of(2), Role::Objective);
    }
}

// ── Survival ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod survival_tests {
    use ctf_belief::SharedKnowledge;
    use ctf_core::{Cell, Direction, TeamColor};

    use super::helpers::{config, window};
    use crate::{Action, Agent, DecisionReason, Observation, Role};

    #[test]
    fn critical_health_paths_home_ignoring_hostiles() {
        let w = window(&[
            "..r..",
            ".....",
            "B.b..",
            ".....",
            ".....",
        ]);
        let mut agent = Agent::new(1, TeamColor::Blue, Role::Support, &config());
        let mut k = SharedKnowledge::new();
        let obs = Observation::new(&w, Cell::new(8, 5), 1, 5).shooting(true);

        let d = agent.decide(&obs, &mut k);
        assert_eq!(d.action, Action::Move(Direction::Left));
        assert_eq!(d.reason, DecisionReason::Retreat);
        assert_eq!(k.home_flag, Some(Cell::new(6, 5)));
    }

    #[test]
    fn no_ammo_retreats_locally_when_home_unknown() {
        let w = window(&[
            ".....",
            ".....",
            ".#b..",
            ".....",
            ".....",
        ]);
        let mut agent = Agent::new(0, TeamColor::Blue, Role::Objective, &config());
        let mut k = SharedKnowledge::new();
        let obs = Observation::new(&w, Cell::new(8, 5), 3, 0);

        let d = agent.decide(&obs, &mut k);
        assert_eq!(d.action, Action::Move(Direction::Up));
        assert_eq!(d.reason, DecisionReason::RetreatLocal);
    }

    #[test]
    fn critical_at_home_idles() {
        let w = window(&["...", ".b.", "..."]);
        let mut agent = Agent::new(1, TeamColor::Blue, Role::Support, &config());
        let mut k = SharedKnowledge::new();
        k.home_flag = Some(Cell::new(4, 4));

        let d = agent.decide(&Observation::new(&w, Cell::new(4, 4), 1, 1), &mut k);
        assert_eq!(d.action, Action::Noop);
        assert_eq!(d.reason, DecisionReason::AtGoal);
    }
}

// ── Objective role ────────────────────────────────────────────────────────────

#[cfg(test)]
mod objective_tests {
    use ctf_belief::SharedKnowledge;
    use ctf_core::{Cell, Direction, TeamColor, Terrain, VisionWindow};

    use super::helpers::{config, window};
    use crate::{Action, Agent, DecisionReason, Observation, Role};

    #[test]
    fn first_flag_sighting_redirects_immediately() {
        let w = window(&[
            "..r..",
            ".....",
            "..b.R",
            ".....",
            ".....",
        ]);
        let mut agent = Agent::new(0, TeamColor::Blue, Role::Objective, &config());
        let mut k = SharedKnowledge::new();
        assert_eq!(k.enemy_flag, None);

        let obs = Observation::new(&w, Cell::new(5, 5), 3, 3).shooting(true);
        let d = agent.decide(&obs, &mut k);
        assert_eq!(k.enemy_flag, Some(Cell::new(7, 5)));
        assert_eq!(d.action, Action::Move(Direction::Right));
        assert_eq!(d.reason, DecisionReason::SeekFlag);
    }

    #[test]
    fn carrier_returns_home() {
        let w = window(&[
            ".....",
            ".....",
            "B.b..",
            ".....",
            ".....",
        ]);
        let mut agent = Agent::new(0, TeamColor::Blue, Role::Objective, &config());
        let mut k = SharedKnowledge::new();
        k.enemy_flag = Some(Cell::new(15, 5));

        let obs = Observation::new(&w, Cell::new(5, 5), 3, 3).carrying_flag(true);
        let d = agent.decide(&obs, &mut k);
        assert_eq!(d.action, Action::Move(Direction::Left));
        assert_eq!(d.reason, DecisionReason::ReturnFlag);
    }

    #[test]
    fn carrier_without_home_explores_homeward() {
        let w = VisionWindow::fog(1);
        let mut agent = Agent::new(0, TeamColor::Blue, Role::Objective, &config());
        let mut k = SharedKnowledge::new();

        let obs = Observation::new(&w, Cell::new(10, 5), 3, 3).carrying_flag(true);
        let d = agent.decide(&obs, &mut k);
        assert_eq!(d.action, Action::Move(Direction::Left));
        assert_eq!(d.reason, DecisionReason::ExploreForward);
    }

    #[test]
    fn without_goal_engages_aligned_hostile() {
        let w = window(&[
            ".....",
            ".....",
            "r.b..",
            ".....",
            ".....",
        ]);
        let mut agent = Agent::new(0, TeamColor::Blue, Role::Objective, &config());
        let mut k = SharedKnowledge::new();

        let d = agent.decide(&Observation::new(&w, Cell::new(5, 5), 3, 3).shooting(true), &mut k);
        assert_eq!(d.action, Action::Shoot(Direction::Left));
        assert_eq!(d.reason, DecisionReason::Engage);
        assert_eq!(agent.memory().pending_target(), None);
    }

    #[test]
    fn unreachable_goal_falls_back_to_greedy_then_any_open() {
        let mut agent = Agent::new(0, TeamColor::Blue, Role::Objective, &config());
        let mut k = SharedKnowledge::new();
        let flag = Cell::new(0, 5);
        k.enemy_flag = Some(flag);
        k.map.set(flag, Terrain::EnemyFlag);
        for c in [Cell::new(1, 5), Cell::new(0, 4), Cell::new(0, 6)] {
            k.map.set(c, Terrain::Wall);
        }

        let fog = VisionWindow::fog(1);
        let here = Cell::new(5, 5);
        let d = agent.decide(&Observation::new(&fog, here, 3, 3), &mut k);
        assert_eq!(d.action, Action::Move(Direction::Left));
        assert_eq!(d.reason, DecisionReason::GreedyFallback);

        // The move failed; greedy is closed, so any open direction.
        let d = agent.decide(&Observation::new(&fog, here, 3, 3), &mut k);
        assert_eq!(d.action, Action::Move(Direction::Right));
        assert_eq!(d.reason, DecisionReason::AnyOpen);
        assert_eq!(k.map.get(Cell::new(4, 5)), Terrain::Wall);
    }

    #[test]
    fn escape_ordering_tries_perpendicular_first() {
        let mut cfg = config();
        cfg.nav.anti_loop = ctf_core::AntiLoop::EscapeOrdering;
        let mut agent = Agent::new(0, TeamColor::Blue, Role::Objective, &cfg);
        let mut k = SharedKnowledge::new();
        let flag = Cell::new(0, 5);
        k.enemy_flag = Some(flag);
        k.map.set(flag, Terrain::EnemyFlag);
        for c in [Cell::new(1, 5), Cell::new(0, 4), Cell::new(0, 6)] {
            k.map.set(c, Terrain::Wall);
        }

        let fog = VisionWindow::fog(1);
        let here = Cell::new(5, 5);
        agent.decide(&Observation::new(&fog, here, 3, 3), &mut k);
        let d = agent.decide(&Observation::new(&fog, here, 3, 3), &mut k);
        assert_eq!(d.action, Action::Move(Direction::Up));
        assert_eq!(d.reason, DecisionReason::AnyOpen);
    }
}

// ── Support role ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod support_tests {
    use ctf_belief::SharedKnowledge;
    use ctf_core::{Cell, Direction, TeamColor, Terrain, VisionWindow};
    use ctf_nav::DijkstraPathFinder;

    use super::helpers::{config, window};
    use crate::{Action, Agent, DecisionReason, Observation, Role};

    #[test]
    fn match_start_fog_moves_toward_projection() {
        let cfg = config();
        let w = VisionWindow::fog(2);
        let here = Cell::new(2, 5);
        let mut agent = Agent::new(1, TeamColor::Blue, Role::Support, &cfg);
        let mut k = SharedKnowledge::new();

        let d = agent.decide(&Observation::new(&w, here, 3, 3), &mut k);
        assert_eq!(d.reason, DecisionReason::ExploreForward);

        // Agent 1 fans out two rows up from a projection eight cells ahead.
        let target = Cell::new(10, 3);
        let Action::Move(dir) = d.action else { panic!("expected a move, got {}", d.action) };
        assert!(here.step(dir).manhattan(target) < here.manhattan(target));
    }

    #[test]
    fn failed_step_is_not_repeated() {
        let w = window(&["...", ".b.", "..."]);
        let here = Cell::new(5, 5);
        let mut agent = Agent::new(1, TeamColor::Blue, Role::Support, &config());
        let mut k = SharedKnowledge::new();

        let first = agent.decide(&Observation::new(&w, here, 3, 3), &mut k);
        assert!(matches!(first.action, Action::Move(_)));

        // Position unchanged: the move bounced off something unseen.
        let second = agent.decide(&Observation::new(&w, here, 3, 3), &mut k);
        assert!(matches!(second.action, Action::Move(_)));
        assert_ne!(second.action, first.action);
        assert_eq!(agent.memory().stuck_count(), 1);
    }

    #[test]
    fn bumped_cell_stays_a_wall_for_the_team() {
        let w = window(&["...", ".b.", "..."]);
        let here = Cell::new(5, 5);
        let mut agent = Agent::new(1, TeamColor::Blue, Role::Support, &config());
        let mut k = SharedKnowledge::new();

        let first = agent.decide(&Observation::new(&w, here, 3, 3), &mut k);
        let target = first.action.move_target(here).unwrap();
        assert_eq!(k.map.get(target), Terrain::Empty);

        // Same view, same place: vision still shows floor, but the move failed.
        agent.decide(&Observation::new(&w, here, 3, 3), &mut k);
        assert_eq!(k.map.get(target), Terrain::Wall);
        assert!(k.map.is_inferred(target));

        // A teammate looking at the same floor does not undo it.
        let mut mate = Agent::new(2, TeamColor::Blue, Role::Support, &config());
        mate.decide(&Observation::new(&w, here, 3, 3), &mut k);
        assert_eq!(k.map.get(target), Terrain::Wall);
        assert_eq!(k.position_of(1), Some(here));
        assert_eq!(k.position_of(2), Some(here));
    }

    #[test]
    fn zero_memory_capacities_do_not_panic() {
        let mut cfg = config();
        cfg.nav.max_blocked = 0;
        cfg.nav.history_len = 0;
        let w = window(&["...", ".b.", "..."]);
        let here = Cell::new(5, 5);
        let mut agent = Agent::new(1, TeamColor::Blue, Role::Support, &cfg);
        let mut k = SharedKnowledge::new();

        agent.decide(&Observation::new(&w, here, 3, 3), &mut k);
        let d = agent.decide(&Observation::new(&w, here, 3, 3), &mut k);
        assert!(matches!(d.action, Action::Move(_)));
        assert!(agent.memory().blocked().is_empty());
        assert_eq!(agent.memory().stuck_count(), 1);
    }

    #[test]
    fn shoots_before_anything_else() {
        let w = window(&[
            "..r..",
            ".....",
            "..b.R",
            ".....",
            ".....",
        ]);
        let mut agent = Agent::new(1, TeamColor::Blue, Role::Support, &config());
        let mut k = SharedKnowledge::new();

        let d = agent.decide(&Observation::new(&w, Cell::new(5, 5), 3, 3).shooting(true), &mut k);
        assert_eq!(d.action, Action::Shoot(Direction::Up));
    }

    #[test]
    fn chases_when_it_cannot_shoot() {
        let w = window(&[
            ".....",
            ".....",
            "..b..",
            ".....",
            "....r",
        ]);
        let mut agent = Agent::new(1, TeamColor::Blue, Role::Support, &config());
        let mut k = SharedKnowledge::new();

        let d = agent.decide(&Observation::new(&w, Cell::new(5, 5), 3, 3), &mut k);
        assert_eq!(d.reason, DecisionReason::Chase);
        assert!(matches!(d.action, Action::Move(Direction::Right | Direction::Down)));
    }

    #[test]
    fn assists_toward_known_flag() {
        let w = window(&["...", ".b.", "..."]);
        let mut agent = Agent::new(2, TeamColor::Blue, Role::Support, &config());
        let mut k = SharedKnowledge::new();
        k.enemy_flag = Some(Cell::new(5, 2));

        let d = agent.decide(&Observation::new(&w, Cell::new(5, 5), 3, 3), &mut k);
        assert_eq!(d.action, Action::Move(Direction::Up));
        assert_eq!(d.reason, DecisionReason::Assist);
    }

    #[test]
    fn on_the_flag_support_keeps_exploring() {
        let w = window(&["...", ".b.", "..."]);
        let mut agent = Agent::new(1, TeamColor::Blue, Role::Support, &config());
        let mut k = SharedKnowledge::new();
        k.enemy_flag = Some(Cell::new(5, 5));

        let d = agent.decide(&Observation::new(&w, Cell::new(5, 5), 3, 3), &mut k);
        assert_eq!(d.reason, DecisionReason::ExploreFrontier);
        assert!(matches!(d.action, Action::Move(_)));
    }

    #[test]
    fn boxed_in_idles() {
        let w = window(&["###", "#b#", "###"]);
        let mut agent = Agent::new(1, TeamColor::Blue, Role::Support, &config());
        let mut k = SharedKnowledge::new();

        let d = agent.decide(&Observation::new(&w, Cell::new(5, 5), 3, 3), &mut k);
        assert_eq!(d.action, Action::Noop);
        assert_eq!(d.reason, DecisionReason::Immobilized);
        assert_eq!(agent.memory().pending_target(), None);
    }

    #[test]
    fn dijkstra_agent_behaves_the_same_on_a_unique_path() {
        let w = window(&[
            "#####",
            "#####",
            "..b.R",
            "#####",
            "#####",
        ]);
        let mut agent = Agent::with_finder(0, TeamColor::Blue, Role::Objective, &config(), DijkstraPathFinder);
        let mut k = SharedKnowledge::new();
        let d = agent.decide(&Observation::new(&w, Cell::new(5, 5), 3, 3), &mut k);
        assert_eq!(d.action, Action::Move(Direction::Right));
    }

    #[test]
    fn terminate_clears_memory() {
        let w = window(&["...", ".b.", "..."]);
        let mut agent = Agent::new(1, TeamColor::Blue, Role::Support, &config());
        let mut k = SharedKnowledge::new();
        agent.decide(&Observation::new(&w, Cell::new(5, 5), 3, 3), &mut k);
        assert!(agent.memory().previous_position().is_some());

        agent.terminate(crate::TerminationReason::Victory);
        assert_eq!(agent.memory().previous_position(), None);
        assert_eq!(agent.memory().history().count(), 0);
    }
}
