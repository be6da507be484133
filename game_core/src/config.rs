use crate::arena::Arena;
use crate::components::Side;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 700.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and arena edge
    pub const PADDLE_SPEED: f32 = 6.0; // units per tick

    // Ball
    pub const BALL_SIZE: f32 = 12.0;
    pub const BALL_SPEED_INIT: f32 = 5.0; // units per tick
    pub const SPIN_FACTOR: f32 = 0.25; // vertical speed per unit of contact offset

    // Computer paddle heuristic
    pub const AI_SPEED_FACTOR: f32 = 0.7; // fraction of player paddle speed
    pub const AI_DEAD_ZONE: f32 = 10.0; // tolerance band around the ball center
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed_init: f32,
    pub spin_factor: f32,
    pub ai_speed_factor: f32,
    pub ai_dead_zone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_init: Params::BALL_SPEED_INIT,
            spin_factor: Params::SPIN_FACTOR,
            ai_speed_factor: Params::AI_SPEED_FACTOR,
            ai_dead_zone: Params::AI_DEAD_ZONE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of a paddle's left edge
    pub fn paddle_x(&self, side: Side, arena: &Arena) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Computer => arena.width - self.paddle_width - self.paddle_margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        let arena = Arena::new();
        assert_eq!(config.paddle_x(Side::Player, &arena), 10.0);
        assert_eq!(config.paddle_x(Side::Computer, &arena), 678.0);
    }

    #[test]
    fn test_default_matches_params() {
        let config = Config::new();
        assert_eq!(config.paddle_speed, Params::PADDLE_SPEED);
        assert_eq!(config.ball_speed_init, Params::BALL_SPEED_INIT);
    }
}
