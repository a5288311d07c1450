//! Property tests for the tick loop over random seeds and input patterns

use proptest::prelude::*;

use super::collision::player_wall_collision;
use super::state::{GameEvent, GamePhase, GameState, Player, Wall};
use super::tick::tick;
use crate::field::FieldSize;
use crate::tuning::Tuning;

fn field() -> FieldSize {
    FieldSize::new(800.0, 600.0).unwrap()
}

/// Play `inputs` (one per tick, `true` = activate) against a fresh session
fn play(seed: u64, inputs: &[bool]) -> GameState {
    let mut state = GameState::new(field(), Tuning::default(), seed);
    for &activate in inputs {
        if activate {
            state.activate();
        }
        tick(&mut state);
    }
    state
}

proptest! {
    #[test]
    fn gravity_accumulates_without_input(seed in any::<u64>(), start_y in 100.0f32..200.0, ticks in 1usize..20) {
        let mut state = GameState::new(field(), Tuning::default(), seed);
        state.player.pos.y = start_y;
        let g = state.player.gravity;

        for _ in 0..ticks {
            let (y0, vy0) = (state.player.pos.y, state.player.vy);
            tick(&mut state);
            prop_assert_eq!(state.phase, GamePhase::Playing);
            prop_assert!((state.player.vy - (vy0 + g)).abs() < 1e-4);
            prop_assert!(state.player.pos.y > y0);
        }
    }

    #[test]
    fn leaving_the_field_freezes_the_session(seed in any::<u64>(), inputs in prop::collection::vec(any::<bool>(), 0..300)) {
        let mut state = play(seed, &inputs);
        // Fall until the floor
        while state.phase == GamePhase::Playing {
            tick(&mut state);
        }
        let r = state.player.radius;
        prop_assert!(state.player.pos.y - r < 0.0 || state.player.pos.y + r > 600.0);

        let player = state.player;
        let walls = state.walls.clone();
        let score = state.score;
        for _ in 0..10 {
            tick(&mut state);
        }
        prop_assert_eq!(state.player, player);
        prop_assert_eq!(state.walls, walls);
        prop_assert_eq!(state.score, score);
    }

    #[test]
    fn no_overlap_means_no_hit(px in 0.0f32..800.0, py in -100.0f32..700.0, wx in -100.0f32..900.0, top in 0.0f32..360.0) {
        let player = Player { pos: glam::Vec2::new(px, py), vy: 0.0, radius: 30.0, gravity: 0.48, jump: 9.0 };
        let wall = Wall { x: wx, width: 60.0, top_height: top, bottom_y: top + 240.0, passed: false };
        let overlapping = px + 30.0 > wx && px - 30.0 < wx + 60.0;
        if !overlapping {
            prop_assert!(!player_wall_collision(&player, &wall));
        }
        if overlapping && (py - 30.0 < top || py + 30.0 > top + 240.0) {
            prop_assert!(player_wall_collision(&player, &wall));
        }
    }

    #[test]
    fn wall_hits_are_never_fatal(seed in any::<u64>(), wall_x in 41.0f32..130.0, below in any::<bool>()) {
        let mut state = GameState::new(field(), Tuning::default(), seed);
        state.player.pos.y = 300.0;
        state.player.gravity = 0.0;
        let top = if below { 60.0 } else { 300.0 };
        state.walls.push(Wall { x: wall_x, width: 60.0, top_height: top, bottom_y: top + 240.0, passed: false });

        tick(&mut state);

        prop_assert_eq!(state.phase, GamePhase::Playing);
        prop_assert!(state.events.contains(&GameEvent::WallHit));
        prop_assert_eq!(state.player.pos.x, state.physics.home_x);
    }

    #[test]
    fn score_counts_each_wall_once(seed in any::<u64>(), inputs in prop::collection::vec(any::<bool>(), 0..1500)) {
        let mut state = GameState::new(field(), Tuning::default(), seed);
        let mut expected = 0u32;
        for &activate in &inputs {
            if activate {
                state.activate();
            }
            tick(&mut state);
            for event in state.drain_events() {
                match event {
                    GameEvent::Scored { score } => {
                        expected += 1;
                        prop_assert_eq!(score, expected);
                    }
                    GameEvent::Restarted => expected = 0,
                    _ => {}
                }
            }
            prop_assert_eq!(state.score, expected);
        }
    }

    #[test]
    fn walls_stay_in_bounds_and_keep_cadence(seed in any::<u64>(), inputs in prop::collection::vec(any::<bool>(), 0..1500)) {
        let mut state = GameState::new(field(), Tuning::default(), seed);
        for &activate in &inputs {
            if activate {
                state.activate();
            }
            tick(&mut state);

            let gap = state.physics.gap;
            for wall in &state.walls {
                prop_assert!(wall.right() >= 0.0);
                prop_assert!(wall.top_height >= 0.0);
                prop_assert!(wall.bottom_y <= 600.0);
                prop_assert!((wall.bottom_y - wall.top_height - gap).abs() < 1e-3);
            }
            if state.phase == GamePhase::Playing {
                let last = state.walls.last();
                prop_assert!(last.is_some());
                let spawn_line = 800.0 - state.physics.spacing;
                prop_assert!(last.is_some_and(|w| w.x >= spawn_line));
            }
        }
    }

    #[test]
    fn restart_always_yields_the_initial_session(seed in any::<u64>(), inputs in prop::collection::vec(any::<bool>(), 0..600)) {
        let fresh = GameState::new(field(), Tuning::default(), seed);
        let mut state = play(seed, &inputs);
        while state.phase == GamePhase::Playing {
            tick(&mut state);
        }
        state.activate();

        prop_assert_eq!(state.phase, GamePhase::Playing);
        prop_assert_eq!(state.score, 0);
        prop_assert!(state.walls.is_empty());
        prop_assert_eq!(state.player, fresh.player);
    }
}
