//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

#[cfg(test)]
mod properties;

pub use collision::{overlaps_horizontally, player_wall_collision};
pub use state::{GameEvent, GamePhase, GameState, Player, Wall};
pub use tick::tick;
