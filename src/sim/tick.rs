//! Fixed simulation tick
//!
//! Core game loop that advances the session by exactly one step. One tick is
//! one rendered frame; all per-tick quantities are in "per tick" units.

use std::borrow::Cow;

use super::collision::{resolve_player_contacts, resolve_projectile_hits};
use super::combat::update_weapon;
use super::input::InputSnapshot;
use super::movement::{move_projectiles, steer_enemies, update_player};
use super::particles::update_particles;
use super::spawner::update_spawner;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one tick
///
/// Order: input -> movement -> spawning -> collisions -> particles -> sweep -> shake decay.
/// Does nothing once the session is over or before the viewport is known.
pub fn tick(state: &mut GameState, input: &InputSnapshot) {
    state.events.clear();
    if state.phase == GamePhase::GameOver {
        return;
    }
    let Some(viewport) = state.viewport else {
        log::debug!("Tick skipped: viewport size not known yet");
        return;
    };

    state.time_ticks += 1;

    // Idle/demo mode - aim at the nearest enemy and hold the trigger
    let input = if input.idle_mode {
        Cow::Owned(idle_input(state, input))
    } else {
        Cow::Borrowed(input)
    };

    // Movement
    update_player(&mut state.player, &input, &viewport, &state.tuning);
    update_weapon(state, &input);
    steer_enemies(
        &mut state.store.entities,
        state.player.pos,
        state.score,
        &state.tuning,
    );
    move_projectiles(&mut state.store.entities, &viewport);

    // Spawning
    update_spawner(state);

    // Collisions
    resolve_player_contacts(state);
    resolve_projectile_hits(state);
    if state.player.is_dead() {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over at tick {} with score {}",
            state.time_ticks,
            state.score
        );
    }

    // Feedback
    update_particles(&mut state.store.particles, state.tuning.particle_drag);
    state.store.sweep();
    state.camera.decay();
}

/// Autopilot input: keep the held keys, aim at the closest live enemy, fire
fn idle_input(state: &GameState, input: &InputSnapshot) -> InputSnapshot {
    let player_pos = state.player.pos;
    let target = state
        .store
        .enemies()
        .filter(|e| e.is_live())
        .min_by(|a, b| {
            a.pos
                .distance_squared(player_pos)
                .partial_cmp(&b.pos.distance_squared(player_pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|e| e.pos);

    InputSnapshot {
        pointer: target.unwrap_or(input.pointer),
        pointer_down: target.is_some(),
        ..input.clone()
    }
}
