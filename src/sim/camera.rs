//! Screen shake ("trauma") accumulator

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Scalar trauma, raised by impacts and decayed every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub trauma: f32,
    max_trauma: f32,
    decay: f32,
    floor: f32,
}

impl Camera {
    pub fn new(max_trauma: f32, decay: f32, floor: f32) -> Self {
        Self {
            trauma: 0.0,
            max_trauma,
            decay,
            floor,
        }
    }

    /// Raise trauma, clamped to `[0, max_trauma]`
    pub fn add_trauma(&mut self, amount: f32) {
        self.trauma = (self.trauma + amount).clamp(0.0, self.max_trauma);
    }

    /// Multiplicative decay with a snap to zero near rest
    pub fn decay(&mut self) {
        self.trauma *= self.decay;
        if self.trauma < self.floor {
            self.trauma = 0.0;
        }
    }
}

/// Random render offset proportional to trauma
pub fn shake_offset<R: Rng + ?Sized>(trauma: f32, rng: &mut R) -> Vec2 {
    if trauma <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (rng.random::<f32>() * 2.0 - 1.0) * trauma,
        (rng.random::<f32>() * 2.0 - 1.0) * trauma,
    )
}
