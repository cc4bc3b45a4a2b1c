//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (entity spawn order)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod combat;
pub mod input;
pub mod movement;
pub mod particles;
pub mod spawner;
pub mod state;
pub mod store;
pub mod tick;

pub use camera::{Camera, shake_offset};
pub use collision::{circles_overlap, resolve_player_contacts, resolve_projectile_hits};
pub use input::{Direction, InputSnapshot};
pub use spawner::spawn_interval;
pub use state::{
    EnemyKind, Entity, EntityKind, GameEvent, GamePhase, GameState, Particle, Player, Viewport,
};
pub use store::EntityStore;
pub use tick::tick;
