//! Renderer seam
//!
//! Drawing lives outside this crate. After every tick the orchestrator hands the
//! renderer a borrowed, read-only view of the session; nothing is copied.

use crate::sim::{Entity, GamePhase, GameState, Particle, Player, Viewport};

/// Read-only snapshot of one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub player: &'a Player,
    /// Enemies and projectiles in spawn order
    pub entities: &'a [Entity],
    pub particles: &'a [Particle],
    /// Screen shake magnitude in world units (0 when shake is disabled)
    pub trauma: f32,
    pub score: u64,
    pub health: i32,
    pub phase: GamePhase,
    pub viewport: Option<Viewport>,
    pub tick: u64,
}

impl<'a> FrameView<'a> {
    pub fn new(state: &'a GameState, shake_enabled: bool) -> Self {
        Self {
            player: &state.player,
            entities: &state.store.entities,
            particles: &state.store.particles,
            trauma: if shake_enabled { state.camera.trauma } else { 0.0 },
            score: state.score,
            health: state.player.health,
            phase: state.phase,
            viewport: state.viewport,
            tick: state.time_ticks,
        }
    }

    pub fn enemies(self) -> impl Iterator<Item = &'a Entity> {
        self.entities.iter().filter(|e| e.is_enemy())
    }

    pub fn projectiles(self) -> impl Iterator<Item = &'a Entity> {
        self.entities.iter().filter(|e| e.is_projectile())
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Anything that can draw a frame
pub trait Renderer {
    fn render(&mut self, view: &FrameView<'_>);
}

/// Renderer that draws nothing (headless runs)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &FrameView<'_>) {}
}
