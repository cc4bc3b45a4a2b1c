//! Per-tick movement: player integration, enemy steering, ballistic projectiles

use glam::Vec2;

use super::input::InputSnapshot;
use super::state::{Entity, Player, Viewport};
use crate::tuning::{EnemyStats, Tuning};
use crate::{angle_of, vec_norm};

/// Accelerate from held directions, apply friction, integrate, clamp, re-aim
pub fn update_player(
    player: &mut Player,
    input: &InputSnapshot,
    viewport: &Viewport,
    tuning: &Tuning,
) {
    let dir = vec_norm(input.axis());
    player.vel += dir * tuning.player_acceleration;
    player.vel *= tuning.player_friction;
    player.pos += player.vel;
    player.pos = viewport.clamp_inside(player.pos, tuning.viewport_margin);
    player.aim = angle_of(input.pointer - player.pos);
}

/// Pursuit speed for a kind at the current score (grows linearly, uncapped)
#[inline]
pub fn enemy_speed(stats: &EnemyStats, score: u64, tuning: &Tuning) -> f32 {
    stats.speed + score as f32 * tuning.speed_per_score
}

/// Sum of unit vectors pointing away from every crowding neighbour
///
/// O(n²) over the enemies in `entities`.
pub fn separation_forces(entities: &[Entity], margin: f32) -> Vec<Vec2> {
    entities
        .iter()
        .enumerate()
        .map(|(i, me)| {
            if !me.is_enemy() || !me.is_live() {
                return Vec2::ZERO;
            }
            entities
                .iter()
                .enumerate()
                .filter(|(j, other)| *j != i && other.is_enemy() && other.is_live())
                .filter(|(_, other)| {
                    me.pos.distance(other.pos) < me.radius + other.radius + margin
                })
                .map(|(_, other)| vec_norm(me.pos - other.pos))
                .sum::<Vec2>()
        })
        .collect()
}

/// Flocking: pursuit toward the player blended with separation, then integrate
pub fn steer_enemies(entities: &mut [Entity], player_pos: Vec2, score: u64, tuning: &Tuning) {
    let separation = separation_forces(entities, tuning.separation_margin);

    for (enemy, push) in entities.iter_mut().zip(separation) {
        let Some(kind) = enemy.enemy_kind() else {
            continue;
        };
        if !enemy.is_live() {
            continue;
        }
        let speed = enemy_speed(tuning.enemy(kind), score, tuning);
        let pursuit = vec_norm(player_pos - enemy.pos);
        enemy.vel = pursuit * speed * tuning.pursuit_weight + push * tuning.separation_weight;
        enemy.pos += enemy.vel;
        if enemy.vel != Vec2::ZERO {
            enemy.facing = angle_of(enemy.vel);
        }
    }
}

/// Straight-line motion; projectiles leaving the viewport are marked for removal
pub fn move_projectiles(entities: &mut [Entity], viewport: &Viewport) {
    for projectile in entities.iter_mut().filter(|e| e.is_projectile() && e.is_live()) {
        projectile.pos += projectile.vel;
        if !viewport.contains(projectile.pos) {
            projectile.pending_removal = true;
        }
    }
}
