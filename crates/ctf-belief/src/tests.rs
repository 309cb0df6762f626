//! Unit tests for ctf-belief.

use ctf_core::{Cell, TeamColor, TileSymbols, VisionWindow};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn window(rows: &[&str]) -> VisionWindow {
    VisionWindow::from_rows(rows, TeamColor::Blue, &TileSymbols::default()).unwrap()
}

// ── BeliefMap ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod map_tests {
    use ctf_core::{Terrain, Tile};

    use super::*;
    use crate::BeliefMap;

    #[test]
    fn new_map_is_all_unknown() {
        let map = BeliefMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get(Cell::new(3, 3)), Terrain::Unknown);
    }

    #[test]
    fn observe_writes_absolute_coordinates() {
        let mut map = BeliefMap::new();
        let written = map.observe(&window(&["#..", ".b.", "..?"]), Cell::new(10, 20));
        assert_eq!(written, 8);
        assert_eq!(map.get(Cell::new(9, 19)),  Terrain::Wall);
        assert_eq!(map.get(Cell::new(10, 20)), Terrain::Empty);
        assert_eq!(map.get(Cell::new(11, 21)), Terrain::Unknown);
    }

    #[test]
    fn dynamic_entities_stored_as_empty() {
        let mut map = BeliefMap::new();
        map.observe(&window(&["r*.", ".b.", "..."]), Cell::new(1, 1));
        assert_eq!(map.get(Cell::new(0, 0)), Terrain::Empty);
        assert_eq!(map.get(Cell::new(1, 0)), Terrain::Empty);
    }

    #[test]
    fn fog_does_not_erase_knowledge() {
        let mut map = BeliefMap::new();
        map.observe(&window(&["#..", ".b.", "..."]), Cell::new(1, 1));
        map.observe(&VisionWindow::fog(1), Cell::new(1, 1));
        assert_eq!(map.get(Cell::new(0, 0)), Terrain::Wall);
    }

    #[test]
    fn inferred_wall_survives_until_observed_otherwise() {
        let mut map = BeliefMap::new();
        let target = Cell::new(2, 1);
        assert!(map.mark_wall(target, Tile::Empty));
        assert!(!map.mark_wall(target, Tile::Empty));

        // Fog over the cell keeps the inference.
        map.observe(&VisionWindow::fog(1), Cell::new(1, 1));
        assert_eq!(map.get(target), Terrain::Wall);

        // Floor again is the reading the move failed under.
        map.observe(&window(&["...", ".b.", "..."]), Cell::new(1, 1));
        assert_eq!(map.get(target), Terrain::Wall);
        assert!(map.is_inferred(target));

        // A different reading lifts it.
        map.observe(&window(&["...", ".b*", "..."]), Cell::new(1, 1));
        assert_eq!(map.get(target), Terrain::Empty);
        assert!(!map.is_inferred(target));
    }

    #[test]
    fn unit_in_the_way_is_retried_once_it_leaves() {
        let mut map = BeliefMap::new();
        let target = Cell::new(2, 1);
        map.mark_wall(target, Tile::Hostile);

        map.observe(&window(&["...", ".br", "..."]), Cell::new(1, 1));
        assert_eq!(map.get(target), Terrain::Wall);

        map.observe(&window(&["...", ".b.", "..."]), Cell::new(1, 1));
        assert_eq!(map.get(target), Terrain::Empty);
    }

    #[test]
    fn standing_in_an_inferred_wall_lifts_it() {
        let mut map = BeliefMap::new();
        let target = Cell::new(2, 1);
        map.mark_wall(target, Tile::Empty);

        map.observe(&window(&["...", ".b.", "..."]), target);
        assert_eq!(map.get(target), Terrain::Empty);
        assert_eq!(map.inferred_count(), 0);
    }

    #[test]
    fn observed_wall_is_not_inferred() {
        let mut map = BeliefMap::new();
        let target = Cell::new(2, 1);
        map.mark_wall(target, Tile::Wall);
        assert!(!map.is_inferred(target));
        assert_eq!(map.get(target), Terrain::Wall);
    }

    #[test]
    fn set_replaces_inference() {
        let mut map = BeliefMap::new();
        let target = Cell::new(2, 1);
        map.mark_wall(target, Tile::Empty);
        map.set(target, Terrain::Empty);
        assert_eq!(map.get(target), Terrain::Empty);
        assert!(!map.is_inferred(target));
    }

    #[test]
    fn set_ignores_unknown() {
        let mut map = BeliefMap::new();
        map.set(Cell::new(0, 0), Terrain::Unknown);
        assert!(map.is_empty());
        map.set(Cell::new(0, 0), Terrain::Empty);
        assert!(map.is_known(Cell::new(0, 0)));
    }
}

// ── SharedKnowledge ───────────────────────────────────────────────────────────

#[cfg(test)]
mod knowledge_tests {
    use super::*;
    use crate::SharedKnowledge;

    #[test]
    fn records_both_flags() {
        let mut k = SharedKnowledge::new();
        let summary = k.observe(&window(&["R..", ".b.", "..B"]), Cell::new(5, 5));
        assert_eq!(summary.enemy_flag, Some(Cell::new(4, 4)));
        assert_eq!(summary.home_flag,  Some(Cell::new(6, 6)));
        assert_eq!(k.enemy_flag, Some(Cell::new(4, 4)));
        assert_eq!(k.home_flag,  Some(Cell::new(6, 6)));
    }

    #[test]
    fn last_sighting_wins_and_never_decays() {
        let mut k = SharedKnowledge::new();
        k.observe(&window(&["R..", ".b.", "..."]), Cell::new(5, 5));
        k.observe(&VisionWindow::fog(1), Cell::new(20, 20));
        assert_eq!(k.enemy_flag, Some(Cell::new(4, 4)));

        k.observe(&window(&["...", ".b.", "..R"]), Cell::new(5, 5));
        assert_eq!(k.enemy_flag, Some(Cell::new(6, 6)));
    }

    #[test]
    fn positions_are_latest_per_agent() {
        let mut k = SharedKnowledge::new();
        k.publish_position(0, Cell::new(1, 1));
        k.publish_position(2, Cell::new(4, 4));
        k.publish_position(0, Cell::new(2, 1));
        assert_eq!(k.position_of(0), Some(Cell::new(2, 1)));
        assert_eq!(k.position_of(1), None);
        assert_eq!(k.position_of(2), Some(Cell::new(4, 4)));
    }

    #[test]
    fn reset_forgets_everything() {
        let mut k = SharedKnowledge::new();
        k.observe(&window(&["R..", ".b.", "..B"]), Cell::new(5, 5));
        k.publish_position(0, Cell::new(5, 5));
        k.reset();
        assert!(k.map.is_empty());
        assert_eq!(k.enemy_flag, None);
        assert_eq!(k.home_flag, None);
        assert!(k.positions.is_empty());
    }
}

// ── AgentMemory ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod memory_tests {
    use super::*;
    use crate::AgentMemory;

    #[test]
    fn history_is_bounded() {
        let mut m = AgentMemory::new(3, 4);
        for x in 0..5 {
            m.record(Cell::new(x, 0), None);
        }
        let h: Vec<_> = m.history().collect();
        assert_eq!(h, vec![Cell::new(2, 0), Cell::new(3, 0), Cell::new(4, 0)]);
        assert!(m.visited_recently(Cell::new(4, 0)));
        assert!(!m.visited_recently(Cell::new(0, 0)));
    }

    #[test]
    fn record_sets_pending_target() {
        let mut m = AgentMemory::new(3, 4);
        m.record(Cell::new(1, 1), Some(Cell::new(2, 1)));
        assert_eq!(m.previous_position(), Some(Cell::new(1, 1)));
        assert_eq!(m.pending_target(), Some(Cell::new(2, 1)));
    }

    #[test]
    fn zero_capacities_are_inert() {
        let mut m = AgentMemory::new(0, 0);
        m.record(Cell::new(1, 1), Some(Cell::new(2, 1)));
        m.record(Cell::new(1, 1), None);
        assert_eq!(m.history().count(), 0);
        m.push_blocked(Cell::new(2, 1));
        assert!(m.blocked().is_empty());
    }

    #[test]
    fn reset_clears_state() {
        let mut m = AgentMemory::new(3, 4);
        m.record(Cell::new(1, 1), Some(Cell::new(2, 1)));
        m.reset();
        assert_eq!(m.previous_position(), None);
        assert_eq!(m.pending_target(), None);
        assert_eq!(m.history().count(), 0);
    }
}

// ── BumpLearner ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod bump_tests {
    use ctf_core::{Direction, Terrain};

    use super::*;
    use crate::{AgentMemory, BeliefMap, BumpLearner, BumpOutcome};

    #[test]
    fn failed_move_marks_target_as_wall() {
        let mut map = BeliefMap::new();
        let fog = VisionWindow::fog(1);
        let mut m = AgentMemory::new(8, 4);
        let here = Cell::new(3, 3);
        let target = here.step(Direction::Right);
        map.set(target, Terrain::Empty);
        m.record(here, Some(target));

        let outcome = BumpLearner::check(&mut m, &fog, here, &mut map);
        assert_eq!(outcome, BumpOutcome::Bumped(target));
        assert_eq!(map.get(target), Terrain::Wall);
        assert_eq!(m.stuck_count(), 1);
        assert_eq!(m.blocked(), &[target]);
        assert_eq!(m.failed_direction(), Some(Direction::Right));
        assert_eq!(m.pending_target(), None);
    }

    #[test]
    fn inference_outlives_the_view_that_hid_it() {
        let mut map = BeliefMap::new();
        let mut m = AgentMemory::new(8, 4);
        let here = Cell::new(1, 1);
        let target = here.step(Direction::Right);
        let view = window(&["...", ".b.", "..."]);
        map.observe(&view, here);
        m.record(here, Some(target));

        BumpLearner::check(&mut m, &view, here, &mut map);
        map.observe(&view, here);
        assert_eq!(map.get(target), Terrain::Wall);

        // Stepping away clears the agent's stuck state, not the team's map.
        let left = here.step(Direction::Left);
        m.record(here, Some(left));
        assert_eq!(BumpLearner::check(&mut m, &view, left, &mut map), BumpOutcome::Moved);
        map.observe(&view, left);
        assert!(m.blocked().is_empty());
        assert_eq!(map.get(target), Terrain::Wall);
    }

    #[test]
    fn consecutive_failures_accumulate() {
        let mut map = BeliefMap::new();
        let fog = VisionWindow::fog(1);
        let mut m = AgentMemory::new(8, 4);
        let here = Cell::new(3, 3);

        m.record(here, Some(here.step(Direction::Right)));
        BumpLearner::check(&mut m, &fog, here, &mut map);
        m.record(here, Some(here.step(Direction::Up)));
        BumpLearner::check(&mut m, &fog, here, &mut map);

        assert_eq!(m.stuck_count(), 2);
        assert_eq!(m.blocked().len(), 2);
        assert_eq!(m.failed_direction(), Some(Direction::Up));
    }

    #[test]
    fn blocked_list_is_bounded() {
        let mut map = BeliefMap::new();
        let fog = VisionWindow::fog(1);
        let mut m = AgentMemory::new(8, 2);
        let here = Cell::new(3, 3);
        for d in [Direction::Left, Direction::Right, Direction::Up] {
            m.record(here, Some(here.step(d)));
            BumpLearner::check(&mut m, &fog, here, &mut map);
        }
        assert_eq!(m.blocked(), &[here.step(Direction::Right), here.step(Direction::Up)]);
    }

    #[test]
    fn successful_move_resets_stuck_state() {
        let mut map = BeliefMap::new();
        let fog = VisionWindow::fog(1);
        let mut m = AgentMemory::new(8, 4);
        let here = Cell::new(3, 3);
        m.record(here, Some(here.step(Direction::Right)));
        BumpLearner::check(&mut m, &fog, here, &mut map);

        m.record(here, Some(here.step(Direction::Down)));
        let outcome = BumpLearner::check(&mut m, &fog, here.step(Direction::Down), &mut map);
        assert_eq!(outcome, BumpOutcome::Moved);
        assert_eq!(m.stuck_count(), 0);
        assert!(m.blocked().is_empty());
        assert_eq!(map.get(here.step(Direction::Down)), Terrain::Unknown);
    }

    #[test]
    fn no_pending_target_is_idle() {
        let mut map = BeliefMap::new();
        let fog = VisionWindow::fog(1);
        let mut m = AgentMemory::new(8, 4);
        assert_eq!(BumpLearner::check(&mut m, &fog, Cell::new(0, 0), &mut map), BumpOutcome::Idle);

        m.record(Cell::new(0, 0), None);
        assert_eq!(BumpLearner::check(&mut m, &fog, Cell::new(0, 0), &mut map), BumpOutcome::Idle);
        assert!(map.is_empty());
    }
}
