//! Wave spawner: one enemy every `spawn_interval` ticks, faster as score grows

use glam::Vec2;
use rand::Rng;

use super::state::{EnemyKind, GameState, Viewport};
use crate::tuning::Tuning;

/// Ticks between spawns at `score`, never below `spawn_min_interval`
pub fn spawn_interval(score: u64, tuning: &Tuning) -> u32 {
    let steps = score / tuning.spawn_score_step;
    let reduction = steps.saturating_mul(tuning.spawn_interval_step as u64);
    let interval = (tuning.spawn_base_interval as u64).saturating_sub(reduction);
    interval.max(tuning.spawn_min_interval as u64) as u32
}

/// Random point just outside one of the four viewport edges
pub fn edge_spawn_position<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport, offset: f32) -> Vec2 {
    let along = rng.random::<f32>();
    match rng.random_range(0..4u8) {
        0 => Vec2::new(along * viewport.width, -offset),
        1 => Vec2::new(viewport.width + offset, along * viewport.height),
        2 => Vec2::new(along * viewport.width, viewport.height + offset),
        _ => Vec2::new(-offset, along * viewport.height),
    }
}

/// Advance the spawn clock and spawn an enemy when it lands on the interval
pub fn update_spawner(state: &mut GameState) {
    let Some(viewport) = state.viewport else {
        return;
    };
    state.spawn_ticks += 1;

    let interval = spawn_interval(state.score, &state.tuning);
    if !state.spawn_ticks.is_multiple_of(interval as u64) {
        return;
    }

    let pos = edge_spawn_position(&mut state.rng, &viewport, state.tuning.spawn_offset);
    let kind = if state.rng.random_bool(state.tuning.tank_chance) {
        EnemyKind::Tank
    } else {
        EnemyKind::Fast
    };
    let id = state.spawn_enemy(kind, pos);
    log::debug!(
        "Spawned {:?} #{} at ({:.0}, {:.0}), interval {}",
        kind,
        id,
        pos.x,
        pos.y,
        interval
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_interval_shrinks_with_score() {
        let tuning = Tuning::default();
        assert_eq!(spawn_interval(0, &tuning), 60);
        assert_eq!(spawn_interval(99, &tuning), 60);
        assert_eq!(spawn_interval(100, &tuning), 57);
        assert_eq!(spawn_interval(1_000, &tuning), 30);
        assert_eq!(spawn_interval(u64::MAX, &tuning), tuning.spawn_min_interval);
    }

    #[test]
    fn test_spawn_positions_are_offscreen() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..200 {
            let pos = edge_spawn_position(&mut rng, &viewport, 40.0);
            assert!(!viewport.contains(pos));
            let on_edge = pos.x == -40.0 || pos.x == 840.0 || pos.y == -40.0 || pos.y == 640.0;
            assert!(on_edge, "{pos:?} not on an offset edge");
        }
    }

    #[test]
    fn test_spawns_on_interval() {
        let mut state = GameState::new(5, Tuning::default());
        state.resize(800.0, 600.0);
        for _ in 0..59 {
            update_spawner(&mut state);
        }
        assert_eq!(state.store.enemy_count(), 0);
        update_spawner(&mut state);
        assert_eq!(state.store.enemy_count(), 1);

        let enemy = &state.store.entities[0];
        assert_eq!(enemy.vel, Vec2::ZERO);
        assert!(enemy.radius > 0.0);
        for _ in 0..60 {
            update_spawner(&mut state);
        }
        assert_eq!(state.store.enemy_count(), 2);
    }

    #[test]
    fn test_tank_mix() {
        let tuning = Tuning {
            spawn_base_interval: 1,
            spawn_min_interval: 1,
            tank_chance: 1.0,
            ..Tuning::default()
        };
        let mut state = GameState::new(5, tuning);
        state.resize(800.0, 600.0);
        update_spawner(&mut state);
        let enemy = &state.store.entities[0];
        assert_eq!(enemy.enemy_kind(), Some(EnemyKind::Tank));
        assert_eq!(enemy.hp, state.tuning.tank.health);
        assert_eq!(enemy.radius, state.tuning.tank.radius);
    }

    #[test]
    fn test_no_spawn_without_viewport() {
        let mut state = GameState::new(5, Tuning::default());
        for _ in 0..120 {
            update_spawner(&mut state);
        }
        assert_eq!(state.store.enemy_count(), 0);
        assert_eq!(state.spawn_ticks, 0);
    }

    proptest! {
        #[test]
        fn prop_interval_monotone_and_floored(a in 0u64..1_000_000, b in 0u64..1_000_000) {
            let tuning = Tuning::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let at_lo = spawn_interval(lo, &tuning);
            let at_hi = spawn_interval(hi, &tuning);
            prop_assert!(at_hi <= at_lo);
            prop_assert!(at_hi >= tuning.spawn_min_interval);
        }
    }
}
