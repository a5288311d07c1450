//! Simulation tick
//!
//! Advances the game by one frame. Constants are per tick; the driver is
//! responsible for calling this at a steady rate. Input is not batched here:
//! `GameState::activate` applies immediately between ticks.

use super::collision::player_wall_collision;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    state.player.integrate();

    // Leaving the field vertically is the only way to lose
    if state.player.out_of_bounds(state.field.height()) {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!("Game over! Final score: {}", state.score);
        return;
    }

    // Reverse order so removal doesn't skip walls
    let scroll = state.physics.scroll_speed;
    for i in (0..state.walls.len()).rev() {
        state.walls[i].x -= scroll;

        // Hitting a wall only knocks the player back
        if player_wall_collision(&state.player, &state.walls[i]) {
            state.player.pos.x = state.physics.home_x;
            state.events.push(GameEvent::WallHit);
            log::debug!("Wall hit at tick {}", state.time_ticks);
        }

        let wall = &mut state.walls[i];
        if !wall.passed && wall.right() < state.player.pos.x {
            wall.passed = true;
            state.score += 1;
            state.events.push(GameEvent::Scored { score: state.score });
        }

        if state.walls[i].right() < 0.0 {
            state.walls.remove(i);
            state.events.push(GameEvent::WallDespawned);
            log::debug!("Wall despawned, {} remaining", state.walls.len());
        }
    }

    let spawn_line = state.field.width() - state.physics.spacing;
    let needs_wall = state.walls.last().is_none_or(|last| last.x < spawn_line);
    if needs_wall {
        state.spawn_wall();
    }
}
