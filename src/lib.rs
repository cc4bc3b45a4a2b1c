//! Swarm Arena - a fixed-tick 2D arena survival simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, particles, shake)
//! - `game`: Frame orchestrator (run/game-over state, restart, tick-then-render)
//! - `render`: Read-only frame view handed to an external renderer
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences

pub mod game;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use render::{FrameView, Renderer};
pub use settings::{QualityPreset, Settings};
pub use tuning::{ConfigError, EnemyStats, Tuning};

/// World-space 2D vector used by every simulation component
pub type Vector2 = glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Reference tick rate for the frame-rate independent driver
    pub const TICK_RATE: f32 = 60.0;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Random extra lifetime (ticks) added to every particle
    pub const PARTICLE_LIFETIME_JITTER: f32 = 30.0;
    /// Hard ceiling on live particles, independent of quality preset
    pub const MAX_PARTICLES: usize = 2000;
}

/// Normalize a vector, mapping the zero vector to itself
#[inline]
pub fn vec_norm(v: Vector2) -> Vector2 {
    v.normalize_or_zero()
}

/// Unit vector pointing along `theta` (radians)
#[inline]
pub fn direction_from_angle(theta: f32) -> Vector2 {
    Vector2::new(theta.cos(), theta.sin())
}

/// Heading of a vector in radians, `atan2(y, x)`
#[inline]
pub fn angle_of(v: Vector2) -> f32 {
    v.y.atan2(v.x)
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
