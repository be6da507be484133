use glam::Vec2;
use rand::Rng;

use crate::arena::Arena;
use crate::config::Config;
use crate::resources::GameRng;

/// Which paddle an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left paddle, human controlled
    Player,
    /// Right paddle, heuristic controlled
    Computer,
}

/// Paddle component. `y` is the top edge, clamped to the arena after
/// every mutation.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, paddle_height: f32) -> f32 {
        self.y + paddle_height / 2.0
    }
}

/// Ball component. `pos` is the top-left of the bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn center_y(&self, ball_size: f32) -> f32 {
        self.pos.y + ball_size / 2.0
    }

    /// Re-center the ball and serve it with a random direction.
    ///
    /// The position is deterministic; only the velocity draws from the
    /// rng: |x speed| is always the initial speed, the y speed is
    /// uniform in [-initial, +initial].
    pub fn reset(&mut self, arena: &Arena, config: &Config, rng: &mut GameRng) {
        self.pos = arena.ball_spawn(config.ball_size);

        let dir: f32 = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            config.ball_speed_init * dir,
            config.ball_speed_init * rng.0.gen_range(-1.0..=1.0),
        );
    }
}
