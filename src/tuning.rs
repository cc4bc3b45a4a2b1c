//! Data-driven game balance
//!
//! Every gameplay constant lives here so the simulation code never branches on
//! magic numbers. Values are per tick: one tick advances positions by exactly
//! one velocity step.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::EnemyKind;

/// Errors raised while loading a tuning file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Per-kind enemy constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub radius: f32,
    pub health: i32,
    /// Pursuit speed in world units per tick (before score scaling)
    pub speed: f32,
    /// Score awarded on kill
    pub score: u64,
    /// 0xRRGGBB
    pub color: u32,
}

/// A particle burst recipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurstSpec {
    pub count: u32,
    pub color: u32,
    pub max_speed: f32,
    /// Lifetime in ticks before the random jitter is added
    pub base_lifetime: f32,
    pub size: f32,
}

/// Complete gameplay tuning for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_radius: f32,
    pub player_max_health: i32,
    pub player_acceleration: f32,
    /// Velocity multiplier applied every tick (exponential decay toward rest)
    pub player_friction: f32,
    /// Distance the player is kept from each viewport edge
    pub viewport_margin: f32,

    // === Weapon ===
    /// Ticks between shots
    pub fire_rate: u32,
    pub projectile_speed: f32,
    pub projectile_radius: f32,
    pub projectile_damage: i32,
    /// Total angular spread (radians) of a shot around the aim direction
    pub projectile_spread: f32,
    pub muzzle_distance: f32,
    pub recoil: f32,
    pub recoil_decay: f32,
    pub hit_knockback: f32,

    // === Enemies ===
    pub fast: EnemyStats,
    pub tank: EnemyStats,
    pub pursuit_weight: f32,
    pub separation_weight: f32,
    pub separation_margin: f32,
    /// Extra pursuit speed per point of score
    pub speed_per_score: f32,
    pub contact_damage: i32,
    pub contact_knockback: f32,

    // === Spawner ===
    pub spawn_base_interval: u32,
    pub spawn_min_interval: u32,
    /// Interval reduction per completed score step
    pub spawn_interval_step: u32,
    /// Score needed per interval reduction step
    pub spawn_score_step: u64,
    /// How far outside the viewport enemies appear
    pub spawn_offset: f32,
    pub tank_chance: f64,

    // === Feedback ===
    pub max_trauma: f32,
    pub trauma_decay: f32,
    /// Trauma below this snaps to zero
    pub trauma_floor: f32,
    pub shot_trauma: f32,
    pub contact_trauma: f32,
    pub kill_trauma: f32,
    /// Particle velocity multiplier per tick
    pub particle_drag: f32,
    pub muzzle_flash: BurstSpec,
    pub hit_sparks: BurstSpec,
    pub death_blood: BurstSpec,
    pub death_debris: BurstSpec,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_radius: 15.0,
            player_max_health: 100,
            player_acceleration: 1.0,
            player_friction: 0.85,
            viewport_margin: 20.0,

            fire_rate: 8,
            projectile_speed: 14.0,
            projectile_radius: 4.0,
            projectile_damage: 10,
            projectile_spread: 0.1,
            muzzle_distance: 24.0,
            recoil: 6.0,
            recoil_decay: 0.8,
            hit_knockback: 8.0,

            fast: EnemyStats {
                radius: 12.0,
                health: 20,
                speed: 2.4,
                score: 10,
                color: 0xff4d6d,
            },
            tank: EnemyStats {
                radius: 22.0,
                health: 60,
                speed: 1.2,
                score: 30,
                color: 0x9d4edd,
            },
            pursuit_weight: 1.0,
            separation_weight: 0.6,
            separation_margin: 4.0,
            speed_per_score: 0.002,
            contact_damage: 1,
            contact_knockback: 6.0,

            spawn_base_interval: 60,
            spawn_min_interval: 15,
            spawn_interval_step: 3,
            spawn_score_step: 100,
            spawn_offset: 40.0,
            tank_chance: 0.15,

            max_trauma: 30.0,
            trauma_decay: 0.9,
            trauma_floor: 0.1,
            shot_trauma: 1.5,
            contact_trauma: 8.0,
            kill_trauma: 5.0,
            particle_drag: 0.92,
            muzzle_flash: BurstSpec {
                count: 5,
                color: 0xffe066,
                max_speed: 3.0,
                base_lifetime: 5.0,
                size: 2.0,
            },
            hit_sparks: BurstSpec {
                count: 6,
                color: 0xffa94d,
                max_speed: 4.0,
                base_lifetime: 10.0,
                size: 2.0,
            },
            death_blood: BurstSpec {
                count: 15,
                color: 0xc9184a,
                max_speed: 6.0,
                base_lifetime: 20.0,
                size: 3.0,
            },
            death_debris: BurstSpec {
                count: 10,
                color: 0xf8f9fa,
                max_speed: 3.0,
                base_lifetime: 30.0,
                size: 2.5,
            },
        }
    }
}

impl Tuning {
    /// Constant table lookup by enemy kind
    pub fn enemy(&self, kind: EnemyKind) -> &EnemyStats {
        match kind {
            EnemyKind::Fast => &self.fast,
            EnemyKind::Tank => &self.tank,
        }
    }

    /// Parse a JSON tuning document; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }
        fn unit_open(field: &'static str, v: f32) -> Result<(), ConfigError> {
            if v > 0.0 && v < 1.0 {
                Ok(())
            } else {
                Err(invalid(field, format!("{v} must be in (0, 1)")))
            }
        }
        fn positive(field: &'static str, v: f32) -> Result<(), ConfigError> {
            if v > 0.0 {
                Ok(())
            } else {
                Err(invalid(field, format!("{v} must be > 0")))
            }
        }

        positive("player_radius", self.player_radius)?;
        positive("projectile_radius", self.projectile_radius)?;
        positive("fast.radius", self.fast.radius)?;
        positive("tank.radius", self.tank.radius)?;
        positive("max_trauma", self.max_trauma)?;
        unit_open("player_friction", self.player_friction)?;
        unit_open("particle_drag", self.particle_drag)?;
        unit_open("trauma_decay", self.trauma_decay)?;
        unit_open("recoil_decay", self.recoil_decay)?;

        if self.player_max_health <= 0 {
            return Err(invalid("player_max_health", "must be > 0"));
        }
        if self.fire_rate == 0 {
            return Err(invalid("fire_rate", "must be at least one tick"));
        }
        if self.spawn_min_interval == 0 {
            return Err(invalid("spawn_min_interval", "must be at least one tick"));
        }
        if self.spawn_min_interval > self.spawn_base_interval {
            return Err(invalid(
                "spawn_min_interval",
                format!(
                    "{} exceeds spawn_base_interval {}",
                    self.spawn_min_interval, self.spawn_base_interval
                ),
            ));
        }
        if self.spawn_score_step == 0 {
            return Err(invalid("spawn_score_step", "must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.tank_chance) {
            return Err(invalid("tank_chance", "must be a probability"));
        }
        Ok(())
    }
}
