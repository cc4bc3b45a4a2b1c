//! Entity storage with deferred removal
//!
//! Passes mark entities with `pending_removal` instead of deleting them while
//! iterating; `sweep` compacts both pools once per tick, keeping order.

use glam::Vec2;
use serde::Serialize;

use super::state::{EnemyKind, Entity, EntityKind, Particle};
use crate::tuning::EnemyStats;

/// Owns every live enemy, projectile and particle
#[derive(Debug, Clone, Default, Serialize)]
pub struct EntityStore {
    /// Enemies and projectiles, in spawn order
    pub entities: Vec<Entity>,
    /// Cosmetic particles, in spawn order
    pub particles: Vec<Particle>,
    next_id: u32,
}

impl EntityStore {
    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Add an enemy at rest; steering picks it up next tick
    pub fn spawn_enemy(&mut self, kind: EnemyKind, pos: Vec2, stats: &EnemyStats) -> u32 {
        let id = self.next_entity_id();
        self.entities.push(Entity {
            id,
            kind: EntityKind::Enemy(kind),
            pos,
            vel: Vec2::ZERO,
            radius: stats.radius,
            hp: stats.health,
            max_hp: stats.health,
            facing: 0.0,
            pending_removal: false,
        });
        id
    }

    pub fn spawn_projectile(&mut self, pos: Vec2, vel: Vec2, radius: f32, facing: f32) -> u32 {
        let id = self.next_entity_id();
        self.entities.push(Entity {
            id,
            kind: EntityKind::Projectile,
            pos,
            vel,
            radius,
            hp: 1,
            max_hp: 1,
            facing,
            pending_removal: false,
        });
        id
    }

    /// Push a particle, evicting the oldest ones to stay within `cap`
    pub fn push_particle(&mut self, particle: Particle, cap: usize) {
        if cap == 0 {
            return;
        }
        if self.particles.len() >= cap {
            let excess = self.particles.len() + 1 - cap;
            self.particles.drain(..excess);
        }
        self.particles.push(particle);
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_enemy())
    }

    pub fn projectiles(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_projectile())
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies().count()
    }

    pub fn projectile_count(&self) -> usize {
        self.projectiles().count()
    }

    /// Drop marked entities and expired particles; returns how many went
    pub fn sweep(&mut self) -> usize {
        let before = self.entities.len() + self.particles.len();
        self.entities.retain(|e| !e.pending_removal);
        self.particles.retain(|p| !p.is_expired());
        before - self.entities.len() - self.particles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn particle(life: f32) -> Particle {
        Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: 1.0,
            color: 0xffffff,
            life,
            max_life: life.max(1.0),
        }
    }

    #[test]
    fn test_sweep_is_stable() {
        let tuning = Tuning::default();
        let mut store = EntityStore::default();
        let ids: Vec<u32> = (0..5)
            .map(|i| store.spawn_enemy(EnemyKind::Fast, Vec2::new(i as f32, 0.0), &tuning.fast))
            .collect();
        store.entities[1].pending_removal = true;
        store.entities[3].pending_removal = true;
        store.particles.push(particle(0.0));
        store.particles.push(particle(4.0));

        assert_eq!(store.sweep(), 3);
        let remaining: Vec<u32> = store.entities.iter().map(|e| e.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[4]]);
        assert_eq!(store.particles.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = EntityStore::default();
        let a = store.spawn_projectile(Vec2::ZERO, Vec2::X, 4.0, 0.0);
        let b = store.spawn_projectile(Vec2::ZERO, Vec2::X, 4.0, 0.0);
        assert_ne!(a, b);
        assert_eq!(store.projectile_count(), 2);
        assert_eq!(store.enemy_count(), 0);
    }

    #[test]
    fn test_particle_cap_evicts_oldest() {
        let mut store = EntityStore::default();
        for i in 0..5 {
            store.push_particle(particle(i as f32 + 1.0), 3);
        }
        assert_eq!(store.particles.len(), 3);
        assert_eq!(store.particles[0].life, 3.0);

        store.push_particle(particle(9.0), 0);
        assert_eq!(store.particles.len(), 3);
    }
}
