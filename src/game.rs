//! Frame orchestrator
//!
//! Owns the session state and the latest input snapshot. The presentation
//! shell writes input between frames, then calls `step` (one tick per frame)
//! or `frame` (fixed 60 Hz ticks from elapsed time). Both render afterwards,
//! including after game over so the final frame stays on screen.

use rand::RngCore;

use crate::consts::{MAX_PARTICLES, MAX_SUBSTEPS, SIM_DT};
use crate::render::{FrameView, Renderer};
use crate::settings::Settings;
use crate::sim::{Direction, GameEvent, GamePhase, GameState, InputSnapshot, tick};
use crate::tuning::Tuning;
use crate::Vector2;

/// One game session plus the plumbing around it
#[derive(Debug)]
pub struct Game {
    state: GameState,
    tuning: Tuning,
    settings: Settings,
    input: InputSnapshot,
    accumulator: f32,
    /// Events from every tick run by the latest `step`/`frame`
    frame_events: Vec<GameEvent>,
}

impl Game {
    pub fn new(seed: u64, tuning: Tuning, settings: Settings) -> Self {
        log::info!("Session started with seed {seed}");
        let mut state = GameState::new(seed, tuning.clone());
        state.max_particles = settings.max_particles().min(MAX_PARTICLES);
        Self {
            state,
            tuning,
            settings,
            input: InputSnapshot::default(),
            accumulator: 0.0,
            frame_events: Vec::new(),
        }
    }

    // === Input handoff ===

    pub fn set_direction(&mut self, dir: Direction, held: bool) {
        self.input.set_held(dir, held);
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.input.pointer = Vector2::new(x, y);
    }

    pub fn set_pointer_down(&mut self, down: bool) {
        self.input.pointer_down = down;
    }

    pub fn set_idle_mode(&mut self, idle: bool) {
        self.input.idle_mode = idle;
    }

    /// Viewport size changed (or became known)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.state.max_particles = settings.max_particles().min(MAX_PARTICLES);
        self.settings = settings;
    }

    // === Driving ===

    /// Run one tick, then render
    pub fn step(&mut self, renderer: &mut impl Renderer) {
        self.frame_events.clear();
        self.update();
        self.render(renderer);
    }

    /// Run as many fixed ticks as `elapsed` seconds cover, then render once
    ///
    /// Returns the number of ticks executed.
    pub fn frame(&mut self, elapsed: f32, renderer: &mut impl Renderer) -> u32 {
        self.frame_events.clear();
        // NaN or infinite frame times would poison the accumulator for good
        if elapsed.is_finite() {
            self.accumulator += elapsed.clamp(0.0, 0.1);
        }

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.update();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than spiralling
            self.accumulator = 0.0;
        }

        self.render(renderer);
        substeps
    }

    fn update(&mut self) {
        if self.state.phase == GamePhase::GameOver {
            return;
        }
        tick(&mut self.state, &self.input);
        self.frame_events.extend_from_slice(&self.state.events);
    }

    pub fn render(&self, renderer: &mut impl Renderer) {
        let view = FrameView::new(&self.state, self.settings.effective_screen_shake());
        renderer.render(&view);
    }

    /// Reset the session; the viewport and held input carry over
    pub fn restart(&mut self) {
        let seed = self.state.rng.next_u64();
        let viewport = self.state.viewport;
        let mut state = GameState::new(seed, self.tuning.clone());
        state.max_particles = self.settings.max_particles().min(MAX_PARTICLES);
        if let Some(vp) = viewport {
            state.resize(vp.width, vp.height);
        }
        self.state = state;
        self.accumulator = 0.0;
        self.frame_events.clear();
        log::info!("Game restarted with seed {seed}");
    }

    // === Outputs ===

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn health(&self) -> i32 {
        self.state.player.health
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn is_game_over(&self) -> bool {
        !self.is_running()
    }

    /// Events from the ticks run by the latest `step`/`frame`; empty when none ran
    pub fn events(&self) -> &[GameEvent] {
        &self.frame_events
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
