//! Frame driver
//!
//! Owns one session and runs it from the host's frame callback: input lands
//! between ticks, ticks run at a fixed rate from an accumulator, and readouts
//! go to a `Hud` sink. The host supplies the loop (requestAnimationFrame in
//! the browser, a sleeping loop natively).

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::field::FieldSize;
use crate::renderer::{Vertex, shapes};
use crate::sim::{GameEvent, GameState, tick};
use crate::starfield::Starfield;
use crate::tuning::Tuning;

/// Decorrelates the starfield RNG from the gap RNG
const STARFIELD_SEED_SALT: u64 = 0x5ca1_ab1e;

/// Display sink for the two readouts the game pushes out
pub trait Hud {
    /// Called whenever the score changes, including the reset to 0
    fn score_changed(&mut self, score: u32);
    /// Called on entering game over (`true`) and on restart (`false`)
    fn game_over_changed(&mut self, game_over: bool);
}

/// Hud that just logs, for headless runs
#[derive(Debug, Default)]
pub struct LogHud;

impl Hud for LogHud {
    fn score_changed(&mut self, score: u32) {
        log::info!("Score: {}", score);
    }

    fn game_over_changed(&mut self, game_over: bool) {
        if game_over {
            log::info!("GAME OVER - activate to restart");
        }
    }
}

/// Game instance holding all session state
pub struct Game {
    pub state: GameState,
    pub starfield: Starfield,
    accumulator: f32,
}

impl Game {
    pub fn new(field: FieldSize, tuning: Tuning, seed: u64) -> Self {
        let starfield = Starfield::new(
            field,
            tuning.pixels_per_meteor,
            seed ^ STARFIELD_SEED_SALT,
        );
        log::info!(
            "Game initialized: {}x{} field, seed {}",
            field.width(),
            field.height(),
            seed
        );
        Self {
            state: GameState::new(field, tuning, seed),
            starfield,
            accumulator: 0.0,
        }
    }

    /// Click, tap or Space: applies to the state immediately
    pub fn activate(&mut self) {
        self.state.activate();
    }

    /// Adopt new field dimensions. Degenerate sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) -> Option<FieldSize> {
        let Some(field) = FieldSize::new(width, height) else {
            log::warn!("Ignoring invalid field size {}x{}", width, height);
            return None;
        };
        self.state.resize(field);
        self.starfield
            .rebuild(field, self.state.tuning.pixels_per_meteor);
        Some(field)
    }

    /// Push the current readouts, e.g. right after startup
    pub fn sync_hud(&self, hud: &mut impl Hud) {
        hud.score_changed(self.state.score);
        hud.game_over_changed(self.state.is_game_over());
    }

    /// Run the ticks owed for `dt` seconds of wall time and report readouts.
    /// Returns the number of ticks run.
    pub fn frame(&mut self, dt: f32, hud: &mut impl Hud) -> u32 {
        if dt.is_finite() {
            self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);
        }

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state);
            self.starfield.step();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // Drop any backlog we couldn't catch up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        self.flush_events(hud);
        substeps
    }

    /// Triangles for the current frame, in field pixels
    pub fn vertices(&self) -> Vec<Vertex> {
        shapes::scene(&self.state, &self.starfield)
    }

    fn flush_events(&mut self, hud: &mut impl Hud) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Scored { score } => hud.score_changed(score),
                GameEvent::GameOver { .. } => hud.game_over_changed(true),
                GameEvent::Restarted => {
                    hud.score_changed(0);
                    hud.game_over_changed(false);
                }
                _ => {}
            }
        }
    }
}

/// Simple demo player: flap whenever the pig sinks below the next gap's centre
pub fn autopilot_wants_jump(state: &GameState) -> bool {
    if state.is_game_over() {
        return false;
    }
    let player = &state.player;
    let target = state
        .walls
        .iter()
        .filter(|w| w.right() >= player.pos.x - player.radius)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|w| w.gap_center())
        .unwrap_or(state.field.height() * 0.5);

    player.vy >= 0.0 && player.pos.y > target + player.radius * (2.0 / 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    /// Records every readout pushed to it
    #[derive(Default)]
    struct RecordingHud {
        scores: Vec<u32>,
        game_over: Vec<bool>,
    }

    impl Hud for RecordingHud {
        fn score_changed(&mut self, score: u32) {
            self.scores.push(score);
        }

        fn game_over_changed(&mut self, game_over: bool) {
            self.game_over.push(game_over);
        }
    }

    fn new_game() -> Game {
        Game::new(
            FieldSize::new(800.0, 600.0).unwrap(),
            Tuning::default(),
            42,
        )
    }

    #[test]
    fn test_frame_runs_fixed_ticks() {
        let mut game = new_game();
        let mut hud = RecordingHud::default();
        // 2.5 ticks worth of time: two ticks now, remainder carried
        assert_eq!(game.frame(SIM_DT * 2.5, &mut hud), 2);
        assert_eq!(game.state.time_ticks, 2);
        assert_eq!(game.frame(SIM_DT * 0.6, &mut hud), 1);
        assert_eq!(game.state.time_ticks, 3);
    }

    #[test]
    fn test_frame_caps_substeps() {
        let mut game = new_game();
        let mut hud = RecordingHud::default();
        // A long stall is clamped and capped
        assert_eq!(game.frame(5.0, &mut hud), MAX_SUBSTEPS);
        assert!(game.frame(0.0, &mut hud) <= 1);
    }

    #[test]
    fn test_hud_sees_game_over_and_restart() {
        let mut game = new_game();
        let mut hud = RecordingHud::default();
        game.sync_hud(&mut hud);
        assert_eq!(hud.scores, vec![0]);
        assert_eq!(hud.game_over, vec![false]);

        // Free fall until the floor
        for _ in 0..200 {
            game.frame(SIM_DT * 1.01, &mut hud);
        }
        assert_eq!(game.state.phase, GamePhase::GameOver);
        assert_eq!(hud.game_over, vec![false, true]);

        game.activate();
        game.frame(SIM_DT * 1.01, &mut hud);
        assert_eq!(game.state.phase, GamePhase::Playing);
        assert_eq!(hud.game_over, vec![false, true, false]);
        assert_eq!(hud.scores, vec![0, 0]);
    }

    #[test]
    fn test_resize_rejects_degenerate_sizes() {
        let mut game = new_game();
        assert!(game.resize(0.0, 300.0).is_none());
        assert_eq!(game.state.field.width(), 800.0);

        let field = game.resize(400.0, 300.0).unwrap();
        assert_eq!(game.state.field, field);
        assert_eq!(game.starfield.meteors.len(), 20);
    }

    #[test]
    fn test_autopilot_scores() {
        let mut game = new_game();
        let mut hud = RecordingHud::default();
        for _ in 0..1500 {
            if autopilot_wants_jump(&game.state) {
                game.activate();
            }
            game.frame(SIM_DT * 1.01, &mut hud);
        }
        assert_eq!(game.state.phase, GamePhase::Playing);
        assert!(game.state.score >= 3, "score {}", game.state.score);
        assert_eq!(hud.scores.last().copied(), Some(game.state.score));
    }

    #[test]
    fn test_vertices_cover_scene() {
        let game = new_game();
        assert!(!game.vertices().is_empty());
    }
}
