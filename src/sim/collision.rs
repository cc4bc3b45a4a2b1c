//! Circle-circle collision and combat resolution
//!
//! Runs after movement so every check sees this tick's positions. Both passes
//! are O(n²) pairwise scans in entity order; a spatial grid could replace them
//! without changing the results.

use glam::Vec2;

use super::particles::emit_burst;
use super::state::{GameEvent, GameState};
use crate::tuning::BurstSpec;
use crate::vec_norm;

/// Strict overlap test between two circles
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Enemies touching the player deal damage and bounce back along their pursuit line
///
/// Returns the total damage dealt this tick.
pub fn resolve_player_contacts(state: &mut GameState) -> i32 {
    let tuning = &state.tuning;
    let player = &mut state.player;
    let mut total = 0;

    for enemy in state
        .store
        .entities
        .iter_mut()
        .filter(|e| e.is_enemy() && e.is_live())
    {
        if !circles_overlap(enemy.pos, enemy.radius, player.pos, player.radius) {
            continue;
        }
        player.take_damage(tuning.contact_damage);
        state.camera.add_trauma(tuning.contact_trauma);
        total += tuning.contact_damage;

        let pursuit = vec_norm(player.pos - enemy.pos);
        enemy.vel = -pursuit * tuning.contact_knockback;
        enemy.pos += enemy.vel;
    }

    if total > 0 {
        state.events.push(GameEvent::PlayerHit { damage: total });
        log::trace!("Player took {} contact damage, health {}", total, player.health);
    }
    total
}

/// Each live projectile hits at most the first live enemy it overlaps
///
/// Returns the score earned this tick.
pub fn resolve_projectile_hits(state: &mut GameState) -> u64 {
    let tuning = &state.tuning;
    let entities = &mut state.store.entities;
    let mut bursts: Vec<(Vec2, BurstSpec)> = Vec::new();
    let mut earned = 0;

    for i in 0..entities.len() {
        let projectile = &entities[i];
        if !projectile.is_projectile() || !projectile.is_live() {
            continue;
        }
        let (shot_pos, shot_radius, shot_dir) =
            (projectile.pos, projectile.radius, vec_norm(projectile.vel));

        let Some(j) = entities.iter().position(|e| {
            e.is_enemy() && e.is_live() && circles_overlap(e.pos, e.radius, shot_pos, shot_radius)
        }) else {
            continue;
        };

        entities[i].pending_removal = true;

        let enemy = &mut entities[j];
        let Some(kind) = enemy.enemy_kind() else {
            continue;
        };
        enemy.hp -= tuning.projectile_damage;
        enemy.pos += shot_dir * tuning.hit_knockback;
        bursts.push((enemy.pos, tuning.hit_sparks));
        state.events.push(GameEvent::EnemyHit { kind });

        if enemy.hp <= 0 {
            enemy.pending_removal = true;
            let reward = tuning.enemy(kind).score;
            earned += reward;
            state.camera.add_trauma(tuning.kill_trauma);
            bursts.push((enemy.pos, tuning.death_blood));
            bursts.push((enemy.pos, tuning.death_debris));
            state.events.push(GameEvent::EnemyKilled {
                kind,
                score: reward,
            });
            log::debug!("{:?} #{} killed (+{})", kind, enemy.id, reward);
        }
    }

    // Deferred so the entity scan above holds the only borrow of the store
    for (pos, spec) in &bursts {
        emit_burst(&mut state.store, &mut state.rng, *pos, spec, state.max_particles);
    }

    state.score += earned;
    earned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::EnemyKind;
    use crate::tuning::Tuning;

    fn arena() -> GameState {
        let mut state = GameState::new(77, Tuning::default());
        state.resize(800.0, 600.0);
        state
    }

    #[test]
    fn test_circles_overlap_is_strict() {
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::new(9.0, 0.0), 5.0));
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 5.0));
    }

    #[test]
    fn test_contact_damages_and_knocks_back() {
        let mut state = arena();
        state.player.pos = Vec2::new(100.0, 100.0);
        state.spawn_enemy(EnemyKind::Fast, Vec2::new(100.0, 80.0));

        let dealt = resolve_player_contacts(&mut state);
        assert_eq!(dealt, state.tuning.contact_damage);
        assert_eq!(state.player.health, 100 - state.tuning.contact_damage);
        assert_eq!(state.camera.trauma, state.tuning.contact_trauma);

        let enemy = &state.store.entities[0];
        assert!(enemy.vel.abs_diff_eq(Vec2::new(0.0, -state.tuning.contact_knockback), 1e-5));
        assert!(enemy.pos.abs_diff_eq(Vec2::new(100.0, 80.0 - state.tuning.contact_knockback), 1e-4));
    }

    #[test]
    fn test_contact_health_never_negative() {
        let mut state = arena();
        state.player.pos = Vec2::new(100.0, 100.0);
        state.player.health = 1;
        state.spawn_enemy(EnemyKind::Fast, Vec2::new(100.0, 95.0));
        state.spawn_enemy(EnemyKind::Tank, Vec2::new(105.0, 100.0));
        resolve_player_contacts(&mut state);
        assert_eq!(state.player.health, 0);
        assert!(state.player.is_dead());
    }

    #[test]
    fn test_projectile_hits_only_first_enemy() {
        let mut state = arena();
        state.spawn_enemy(EnemyKind::Fast, Vec2::new(200.0, 200.0));
        state.spawn_enemy(EnemyKind::Fast, Vec2::new(202.0, 200.0));
        state
            .store
            .spawn_projectile(Vec2::new(201.0, 200.0), Vec2::new(10.0, 0.0), 4.0, 0.0);

        resolve_projectile_hits(&mut state);

        let damage = state.tuning.projectile_damage;
        let full = state.tuning.fast.health;
        let entities = &state.store.entities;
        assert_eq!(entities[0].hp, full - damage);
        assert_eq!(entities[1].hp, full);
        assert!(entities[2].pending_removal);
        assert_eq!(
            state.store.particles.len(),
            state.tuning.hit_sparks.count as usize
        );
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_hit_knockback_follows_projectile() {
        let mut state = arena();
        state.spawn_enemy(EnemyKind::Tank, Vec2::new(300.0, 300.0));
        state
            .store
            .spawn_projectile(Vec2::new(290.0, 300.0), Vec2::new(14.0, 0.0), 4.0, 0.0);
        resolve_projectile_hits(&mut state);
        let expected = Vec2::new(300.0 + state.tuning.hit_knockback, 300.0);
        assert!(state.store.entities[0].pos.abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn test_kill_awards_score_once() {
        let mut state = arena();
        state.spawn_enemy(EnemyKind::Tank, Vec2::new(300.0, 300.0));
        state.store.entities[0].hp = 5;
        // Two shots on the same enemy in one tick: the second finds no live target
        state
            .store
            .spawn_projectile(Vec2::new(300.0, 300.0), Vec2::new(14.0, 0.0), 4.0, 0.0);
        state
            .store
            .spawn_projectile(Vec2::new(301.0, 300.0), Vec2::new(14.0, 0.0), 4.0, 0.0);

        let earned = resolve_projectile_hits(&mut state);
        assert_eq!(earned, state.tuning.tank.score);
        assert_eq!(state.score, state.tuning.tank.score);
        assert!(state.store.entities[0].pending_removal);
        assert!(state.store.entities[1].pending_removal);
        assert!(!state.store.entities[2].pending_removal);
        assert_eq!(state.camera.trauma, state.tuning.kill_trauma);

        let tuning = &state.tuning;
        let colors: Vec<u32> = state.store.particles.iter().map(|p| p.color).collect();
        assert!(colors.contains(&tuning.death_blood.color));
        assert!(colors.contains(&tuning.death_debris.color));
        assert_eq!(
            colors.len(),
            (tuning.hit_sparks.count + tuning.death_blood.count + tuning.death_debris.count)
                as usize
        );
        assert!(state.events.contains(&GameEvent::EnemyKilled {
            kind: EnemyKind::Tank,
            score: tuning.tank.score,
        }));
    }

    #[test]
    fn test_dead_projectiles_are_ignored() {
        let mut state = arena();
        state.spawn_enemy(EnemyKind::Fast, Vec2::new(300.0, 300.0));
        let id = state
            .store
            .spawn_projectile(Vec2::new(300.0, 300.0), Vec2::X, 4.0, 0.0);
        state
            .store
            .entities
            .iter_mut()
            .filter(|e| e.id == id)
            .for_each(|e| e.pending_removal = true);
        resolve_projectile_hits(&mut state);
        assert_eq!(state.store.entities[0].hp, state.tuning.fast.health);
    }
}
