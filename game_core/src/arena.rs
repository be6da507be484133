use glam::Vec2;

use crate::config::Params;

/// The fixed logical playing field. All simulation positions are
/// expressed in this coordinate space (origin top-left, y grows down)
/// regardless of how the renderer scales it on screen.
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp a paddle top edge so the paddle stays fully inside the arena
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.clamp(0.0, self.height - paddle_height)
    }

    /// Center spawn position for the ball (top-left of its bounding box)
    pub fn ball_spawn(&self, ball_size: f32) -> Vec2 {
        Vec2::new(
            (self.width - ball_size) / 2.0,
            (self.height - ball_size) / 2.0,
        )
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
        }
    }
}
