//! Player weapon: cooldown, recoil, projectile spawn with spread

use rand::Rng;

use super::input::InputSnapshot;
use super::particles::emit_burst;
use super::state::{GameEvent, GameState};
use crate::{direction_from_angle, normalize_angle};

/// Tick the weapon; fires one projectile when the trigger is held and ready
///
/// Returns true if a shot was fired.
pub fn update_weapon(state: &mut GameState, input: &InputSnapshot) -> bool {
    let tuning = &state.tuning;
    let player = &mut state.player;

    player.cooldown = player.cooldown.saturating_sub(1);
    player.recoil *= tuning.recoil_decay;

    if !input.pointer_down || player.cooldown > 0 {
        return false;
    }

    player.cooldown = tuning.fire_rate;
    player.recoil = tuning.recoil;
    state.camera.add_trauma(tuning.shot_trauma);

    let aim_dir = direction_from_angle(player.aim);
    let muzzle = player.pos + aim_dir * tuning.muzzle_distance;
    let spread = (state.rng.random::<f32>() - 0.5) * tuning.projectile_spread;
    let heading = normalize_angle(player.aim + spread);
    let vel = direction_from_angle(heading) * tuning.projectile_speed;

    state
        .store
        .spawn_projectile(muzzle, vel, tuning.projectile_radius, heading);
    emit_burst(
        &mut state.store,
        &mut state.rng,
        muzzle,
        &tuning.muzzle_flash,
        state.max_particles,
    );
    state.events.push(GameEvent::ShotFired);
    log::trace!("Shot fired at heading {heading:.3}");
    true
}
