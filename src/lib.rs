//! Sky Pig - a one-button arcade game
//!
//! Core modules:
//! - `sim`: Simulation (physics, wall lifecycle, collisions, scoring)
//! - `field`: Playing-field dimensions and container fitting
//! - `tuning`: Data-driven game balance, scaled to the field
//! - `starfield`: Decorative meteor background
//! - `renderer`: WebGPU rendering pipeline
//! - `driver`: Frame driver tying ticks, input, HUD and rendering together

pub mod driver;
pub mod field;
pub mod renderer;
pub mod sim;
pub mod starfield;
pub mod tuning;

pub use driver::{Game, Hud, LogHud};
pub use field::FieldSize;
pub use starfield::Starfield;
pub use tuning::{Physics, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate. Physics constants are tuned per tick at this rate.
    pub const TICK_HZ: f32 = 60.0;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_HZ;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Largest frame delta the driver will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Field defaults (4:3, capped at 800 px wide)
    pub const MAX_FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_ASPECT: f32 = 0.75;
    /// Horizontal breathing room left inside the container
    pub const CONTAINER_MARGIN: f32 = 20.0;
}
