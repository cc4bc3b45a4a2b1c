//! Input snapshot handed to each tick
//!
//! The presentation shell writes raw key/pointer state as events arrive; the
//! tick only reads it at its start.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Abstract movement directions (not literal key names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Input state for a single tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Movement directions currently held
    pub held: HashSet<Direction>,
    /// Pointer position in viewport coordinates
    pub pointer: Vec2,
    /// Fire button held
    pub pointer_down: bool,
    /// Idle/demo mode - aim at the nearest enemy and keep firing
    pub idle_mode: bool,
}

impl InputSnapshot {
    pub fn set_held(&mut self, dir: Direction, held: bool) {
        if held {
            self.held.insert(dir);
        } else {
            self.held.remove(&dir);
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held.contains(&dir)
    }

    /// Per-axis sum of held directions, each axis in {-1, 0, 1} (y grows downward)
    pub fn axis(&self) -> Vec2 {
        let axis = |neg: Direction, pos: Direction| {
            self.is_held(pos) as i32 as f32 - self.is_held(neg) as i32 as f32
        };
        Vec2::new(
            axis(Direction::Left, Direction::Right),
            axis(Direction::Up, Direction::Down),
        )
    }
}
