//! Game state and core simulation types
//!
//! Everything a session mutates lives in `GameState`; it is created by
//! `GameState::new` and thrown away on restart.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::store::EntityStore;
use crate::consts::MAX_PARTICLES;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player died; the last frame stays frozen until restart
    GameOver,
}

/// Enemy archetypes; per-kind constants live in `Tuning::enemy`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Fast,
    Tank,
}

/// What a pooled entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Enemy(EnemyKind),
    Projectile,
}

/// An enemy or projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Diagnostic id, never reused within a session
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub hp: i32,
    pub max_hp: i32,
    /// Heading in radians
    pub facing: f32,
    /// Set during the update passes, swept at the end of the tick
    pub pending_removal: bool,
}

impl Entity {
    pub fn enemy_kind(&self) -> Option<EnemyKind> {
        match self.kind {
            EntityKind::Enemy(kind) => Some(kind),
            EntityKind::Projectile => None,
        }
    }

    #[inline]
    pub fn is_enemy(&self) -> bool {
        matches!(self.kind, EntityKind::Enemy(_))
    }

    #[inline]
    pub fn is_projectile(&self) -> bool {
        self.kind == EntityKind::Projectile
    }

    /// Not yet marked for removal this tick
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.pending_removal
    }
}

/// The player (singleton, kept outside the entity pool)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Aim angle toward the pointer (radians)
    pub aim: f32,
    /// Ticks until the weapon may fire again
    pub cooldown: u32,
    pub health: i32,
    pub max_health: i32,
    /// Visual kickback distance, decays every tick
    pub recoil: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: tuning.player_radius,
            aim: 0.0,
            cooldown: 0,
            health: tuning.player_max_health,
            max_health: tuning.player_max_health,
            recoil: 0.0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Apply damage, keeping health within `[0, max_health]`
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).clamp(0, self.max_health);
    }
}

/// A purely cosmetic particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// 0xRRGGBB
    pub color: u32,
    /// Remaining lifetime in ticks
    pub life: f32,
    /// Lifetime at spawn
    pub max_life: f32,
}

impl Particle {
    pub fn is_expired(&self) -> bool {
        self.life <= 0.0
    }

    /// Render opacity, fading to 0 at end of life
    pub fn opacity(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

/// Visible play area in world units (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Inside `[0, width] x [0, height]`
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    /// Clamp into the viewport shrunk by `margin` on every side
    pub fn clamp_inside(&self, pos: Vec2, margin: f32) -> Vec2 {
        // A viewport narrower than two margins pins the axis to its centre
        let max_x = (self.width - margin).max(margin);
        let max_y = (self.height - margin).max(margin);
        let x = if self.width < 2.0 * margin {
            self.width / 2.0
        } else {
            pos.x.clamp(margin, max_x)
        };
        let y = if self.height < 2.0 * margin {
            self.height / 2.0
        } else {
            pos.y.clamp(margin, max_y)
        };
        Vec2::new(x, y)
    }
}

/// Things that happened during the last tick (for sounds, HUD flashes, logs)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired,
    EnemySpawned { kind: EnemyKind },
    EnemyHit { kind: EnemyKind },
    EnemyKilled { kind: EnemyKind, score: u64 },
    PlayerHit { damage: i32 },
    GameOver { score: u64 },
}

/// Complete session state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    pub rng: Pcg32,
    #[serde(skip)]
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Simulation ticks executed while running
    pub time_ticks: u64,
    /// Spawner clock
    pub spawn_ticks: u64,
    /// Monotonic within a session
    pub score: u64,
    pub player: Player,
    pub store: EntityStore,
    pub camera: Camera,
    /// Unknown until the first resize
    pub viewport: Option<Viewport>,
    /// Live particle cap
    pub max_particles: usize,
    /// Events recorded by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            time_ticks: 0,
            spawn_ticks: 0,
            score: 0,
            player: Player::new(&tuning),
            store: EntityStore::default(),
            camera: Camera::new(tuning.max_trauma, tuning.trauma_decay, tuning.trauma_floor),
            viewport: None,
            max_particles: MAX_PARTICLES,
            events: Vec::new(),
            tuning,
        }
    }

    /// Record the viewport size; the first call places the player at its centre
    pub fn resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        if self.viewport.is_none() {
            self.player.pos = viewport.center();
            log::debug!("Player placed at {:?}", self.player.pos);
        }
        self.viewport = Some(viewport);
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Spawn an enemy of `kind` at `pos` using the kind's stats
    pub fn spawn_enemy(&mut self, kind: EnemyKind, pos: Vec2) -> u32 {
        let stats = *self.tuning.enemy(kind);
        let id = self.store.spawn_enemy(kind, pos, &stats);
        self.events.push(GameEvent::EnemySpawned { kind });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_resize_places_player() {
        let mut state = GameState::new(1, Tuning::default());
        assert!(state.viewport.is_none());
        state.resize(800.0, 600.0);
        assert_eq!(state.player.pos, Vec2::new(400.0, 300.0));

        // Later resizes leave the player alone
        state.player.pos = Vec2::new(50.0, 50.0);
        state.resize(1024.0, 768.0);
        assert_eq!(state.player.pos, Vec2::new(50.0, 50.0));
        assert_eq!(state.viewport, Some(Viewport::new(1024.0, 768.0)));
    }

    #[test]
    fn test_take_damage_clamps() {
        let mut player = Player::new(&Tuning::default());
        player.take_damage(250);
        assert_eq!(player.health, 0);
        assert!(player.is_dead());
        player.take_damage(-500);
        assert_eq!(player.health, player.max_health);
    }

    #[test]
    fn test_viewport_clamp() {
        let vp = Viewport::new(200.0, 100.0);
        assert_eq!(vp.clamp_inside(Vec2::new(-5.0, 500.0), 20.0), Vec2::new(20.0, 80.0));
        // Degenerate viewport pins to centre
        let tiny = Viewport::new(10.0, 10.0);
        assert_eq!(tiny.clamp_inside(Vec2::new(0.0, 0.0), 20.0), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_particle_opacity() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 1.0,
            color: 0,
            life: 10.0,
            max_life: 20.0,
        };
        assert!((p.opacity() - 0.5).abs() < 1e-6);
        p.life = -1.0;
        assert_eq!(p.opacity(), 0.0);
        assert!(p.is_expired());
    }
}
