//! Cosmetic particle bursts (muzzle flash, sparks, death bursts)
//!
//! Particles never touch gameplay state; only the renderer reads them.

use glam::Vec2;
use rand::Rng;

use super::state::Particle;
use super::store::EntityStore;
use crate::consts::PARTICLE_LIFETIME_JITTER;
use crate::direction_from_angle;
use crate::tuning::BurstSpec;

/// Emit `spec.count` particles at `origin`, scattered uniformly over a circle
pub fn emit_burst<R: Rng + ?Sized>(
    store: &mut EntityStore,
    rng: &mut R,
    origin: Vec2,
    spec: &BurstSpec,
    cap: usize,
) {
    for _ in 0..spec.count {
        let angle = rng.random::<f32>() * std::f32::consts::TAU;
        let speed = rng.random::<f32>() * spec.max_speed;
        let life = spec.base_lifetime + rng.random::<f32>() * PARTICLE_LIFETIME_JITTER;
        store.push_particle(
            Particle {
                pos: origin,
                vel: direction_from_angle(angle) * speed,
                size: spec.size,
                color: spec.color,
                life,
                max_life: life,
            },
            cap,
        );
    }
}

/// Advance every particle one tick; expired ones are removed by the sweep
pub fn update_particles(particles: &mut [Particle], drag: f32) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.vel *= drag;
        particle.life -= 1.0;
    }
}
