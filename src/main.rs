//! Swarm Arena headless driver
//!
//! Runs an idle-mode session (autopilot aims and fires, the player stands
//! still) and prints a JSON summary.
//! Usage: `swarm-arena [ticks] [seed] [low|medium|high]`.

use serde::Serialize;

use swarm_arena::render::Renderer;
use swarm_arena::sim::GameEvent;
use swarm_arena::{FrameView, Game, QualityPreset, Settings, Tuning};

const DEFAULT_TICKS: u64 = 60 * 60;
const DEFAULT_SEED: u64 = 0x5EED;

/// Logs a one-line status every simulated second
#[derive(Default)]
struct LogRenderer {
    frames: u64,
}

impl Renderer for LogRenderer {
    fn render(&mut self, view: &FrameView<'_>) {
        self.frames += 1;
        if view.tick > 0 && view.tick.is_multiple_of(60) {
            log::info!(
                "t={}s score={} health={} enemies={} shots={} particles={}",
                view.tick / 60,
                view.score,
                view.health,
                view.enemies().count(),
                view.projectiles().count(),
                view.particles.len(),
            );
        }
    }
}

/// Quality preset from the command line; unknown names fall back to the default
fn quality_arg(arg: Option<&str>) -> QualityPreset {
    match arg {
        Some(name) => QualityPreset::parse(name).unwrap_or_else(|| {
            log::warn!("Unknown quality preset {name:?}, using the default");
            QualityPreset::default()
        }),
        None => QualityPreset::default(),
    }
}

#[derive(Serialize)]
struct Summary {
    seed: u64,
    quality: &'static str,
    ticks: u64,
    frames: u64,
    score: u64,
    health: i32,
    game_over: bool,
    kills: u64,
    shots: u64,
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let ticks = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TICKS);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let quality = quality_arg(args.next().as_deref());

    log::info!(
        "Swarm Arena (headless) starting: {ticks} ticks, seed {seed}, quality {}",
        quality.as_str()
    );

    let mut game = Game::new(seed, Tuning::default(), Settings::from_preset(quality));
    game.resize(800.0, 600.0);
    game.set_idle_mode(true);

    let mut renderer = LogRenderer::default();
    let (mut kills, mut shots) = (0, 0);
    for _ in 0..ticks {
        game.step(&mut renderer);
        for event in game.events() {
            match event {
                GameEvent::EnemyKilled { .. } => kills += 1,
                GameEvent::ShotFired => shots += 1,
                _ => {}
            }
        }
        if game.is_game_over() {
            break;
        }
    }

    let summary = Summary {
        seed,
        quality: quality.as_str(),
        ticks: game.state().time_ticks,
        frames: renderer.frames,
        score: game.score(),
        health: game.health(),
        game_over: game.is_game_over(),
        kills,
        shots,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode summary: {e}"),
    }
}
