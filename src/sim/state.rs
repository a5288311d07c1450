//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in `GameState`, so restart and
//! resize are plain mutations of one value.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::field::FieldSize;
use crate::tuning::{Physics, Tuning};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; the simulation is frozen until restart
    GameOver,
}

/// Something observable that happened during a tick or an input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player jumped
    Jumped,
    /// A new wall entered from the right edge
    WallSpawned { top_height: f32 },
    /// Player touched a wall and was knocked back to home x
    WallHit,
    /// Player cleared a wall
    Scored { score: u32 },
    /// A wall left through the left edge
    WallDespawned,
    /// Player left the field vertically
    GameOver { score: u32 },
    /// A fresh session started
    Restarted,
}

/// The falling player body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical velocity (positive is downward)
    pub vy: f32,
    pub radius: f32,
    pub gravity: f32,
    pub jump: f32,
}

impl Player {
    /// Player at rest at its starting position
    pub fn new(physics: &Physics) -> Self {
        Self {
            pos: Vec2::new(physics.home_x, physics.start_y),
            vy: 0.0,
            radius: physics.radius,
            gravity: physics.gravity,
            jump: physics.jump,
        }
    }

    /// One semi-implicit Euler step
    #[inline]
    pub fn integrate(&mut self) {
        self.vy += self.gravity;
        self.pos.y += self.vy;
    }

    /// Instant upward impulse
    #[inline]
    pub fn flap(&mut self) {
        self.vy = -self.jump;
    }

    /// Whether any part of the body is above the top or below the bottom edge
    #[inline]
    pub fn out_of_bounds(&self, field_height: f32) -> bool {
        self.pos.y - self.radius < 0.0 || self.pos.y + self.radius > field_height
    }

    /// Pick up new size-dependent constants without moving
    fn rescale(&mut self, physics: &Physics) {
        self.radius = physics.radius;
        self.gravity = physics.gravity;
        self.jump = physics.jump;
    }
}

/// A wall pair with a gap between its top and bottom segments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Height of the top segment (gap starts here)
    pub top_height: f32,
    /// Where the bottom segment starts (gap ends here)
    pub bottom_y: f32,
    /// Already counted toward the score
    pub passed: bool,
}

impl Wall {
    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_center(&self) -> f32 {
        (self.top_height + self.bottom_y) * 0.5
    }

    /// A wall at the right edge with a random gap position
    ///
    /// `top_height` is uniform in `[min_segment, height - gap - min_segment)`.
    pub fn generate(field: FieldSize, physics: &Physics, rng: &mut Pcg32) -> Self {
        let min_height = physics.min_segment;
        let max_height = field.height() - physics.gap - min_height;
        let top_height = if max_height > min_height {
            rng.random_range(min_height..max_height)
        } else {
            min_height
        };

        Self {
            x: field.width(),
            width: physics.wall_width,
            top_height,
            bottom_y: top_height + physics.gap,
            passed: false,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gap-position RNG (continues across restarts)
    #[serde(skip)]
    rng: Pcg32,
    pub field: FieldSize,
    pub tuning: Tuning,
    /// Constants derived from `field` and `tuning`
    pub physics: Physics,
    pub phase: GamePhase,
    pub score: u32,
    pub player: Player,
    /// Walls in spawn order (last is the most recent)
    pub walls: Vec<Wall>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(field: FieldSize, tuning: Tuning, seed: u64) -> Self {
        let physics = Physics::derive(field, &tuning);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            field,
            tuning,
            physics,
            phase: GamePhase::Playing,
            score: 0,
            player: Player::new(&physics),
            walls: Vec::new(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// The single player input: jump while playing, restart after game over
    pub fn activate(&mut self) {
        match self.phase {
            GamePhase::Playing => {
                self.player.flap();
                self.events.push(GameEvent::Jumped);
            }
            GamePhase::GameOver => self.restart(),
        }
    }

    /// Back to the initial session state. Only valid from game over.
    pub fn restart(&mut self) {
        if self.phase != GamePhase::GameOver {
            return;
        }
        self.player = Player::new(&self.physics);
        self.walls.clear();
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Restarted);
        log::info!("Restarted");
    }

    /// Adopt a new field size. Positions, walls and score are kept as-is.
    pub fn resize(&mut self, field: FieldSize) {
        self.field = field;
        self.physics = Physics::derive(field, &self.tuning);
        self.player.rescale(&self.physics);
        log::info!("Field resized to {}x{}", field.width(), field.height());
    }

    /// Append a wall at the right edge
    pub fn spawn_wall(&mut self) {
        let wall = Wall::generate(self.field, &self.physics, &mut self.rng);
        log::debug!("Wall spawned, gap {}..{}", wall.top_height, wall.bottom_y);
        self.events.push(GameEvent::WallSpawned {
            top_height: wall.top_height,
        });
        self.walls.push(wall);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
