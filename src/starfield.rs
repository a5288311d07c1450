//! Decorative meteor shower behind the playfield
//!
//! Purely visual: never read by the simulation, keeps moving during game over,
//! and is rebuilt whenever the field is resized. Uses its own RNG stream so it
//! can't perturb gap generation.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::field::FieldSize;

/// How far above the field a respawned meteor may start, besides the field height
const SPAWN_HEADROOM: f32 = 20.0;

/// A single streak travelling down-right at 45 degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meteor {
    /// Head position
    pub x: f32,
    pub y: f32,
    /// Pixels per frame on each axis
    pub speed: f32,
    /// Tail length
    pub length: f32,
    /// Tail direction (radians)
    pub angle: f32,
    /// Head opacity, the tail fades to zero
    pub opacity: f32,
}

impl Meteor {
    /// Tail end position
    pub fn tail(&self) -> (f32, f32) {
        (
            self.x - self.length * self.angle.cos(),
            self.y - self.length * self.angle.sin(),
        )
    }
}

/// The full set of meteors for one field size
#[derive(Debug, Clone)]
pub struct Starfield {
    pub meteors: Vec<Meteor>,
    field: FieldSize,
    rng: Pcg32,
}

impl Starfield {
    /// Spread `width / pixels_per_meteor` meteors evenly across the width
    pub fn new(field: FieldSize, pixels_per_meteor: f32, seed: u64) -> Self {
        let mut starfield = Self {
            meteors: Vec::new(),
            field,
            rng: Pcg32::seed_from_u64(seed),
        };
        starfield.rebuild(field, pixels_per_meteor);
        starfield
    }

    /// Throw away all meteors and lay out a fresh set for `field`
    pub fn rebuild(&mut self, field: FieldSize, pixels_per_meteor: f32) {
        self.field = field;
        let count = (field.width() / pixels_per_meteor).floor() as usize;
        self.meteors.clear();
        self.meteors.reserve(count);

        for i in 0..count {
            let start_x = field.width() / count as f32 * i as f32;
            let mut meteor = self.spawn(Some(start_x));
            // Scatter over the whole field instead of queueing above it
            meteor.y = self.rng.random::<f32>() * field.height();
            self.meteors.push(meteor);
        }
        log::debug!("Starfield rebuilt with {} meteors", count);
    }

    /// Move every meteor one frame; ones that leave restart from the left edge
    pub fn step(&mut self) {
        let (w, h) = (self.field.width(), self.field.height());
        for i in 0..self.meteors.len() {
            let meteor = &mut self.meteors[i];
            meteor.x += meteor.speed;
            meteor.y += meteor.speed;
            if meteor.y > h || meteor.x > w {
                self.meteors[i] = self.spawn(Some(0.0));
            }
        }
    }

    /// A new meteor above the field, at `start_x` or a random column
    fn spawn(&mut self, start_x: Option<f32>) -> Meteor {
        let (w, h) = (self.field.width(), self.field.height());
        let rng = &mut self.rng;
        let x = start_x.unwrap_or_else(|| rng.random::<f32>() * w);
        Meteor {
            x,
            y: -SPAWN_HEADROOM - rng.random::<f32>() * h,
            speed: w * 0.002 + rng.random::<f32>() * (w * 0.002),
            length: w * 0.03 + rng.random::<f32>() * (w * 0.04),
            angle: std::f32::consts::FRAC_PI_4,
            opacity: 0.2 + rng.random::<f32>() * 0.5,
        }
    }
}
