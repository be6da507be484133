use crate::{Arena, Config, Paddle, PaddleInput, Side};
use hecs::World;

/// Apply the per-tick input snapshot to the player paddle.
///
/// Pointer input sets the paddle center directly; key input moves the
/// paddle by one speed unit per held flag, up applied before down,
/// re-clamping after each move.
pub fn apply_player_input(world: &mut World, arena: &Arena, config: &Config, input: &PaddleInput) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }

        if let Some(target) = input.target_y {
            paddle.y = target - config.paddle_height / 2.0;
            paddle.y = arena.clamp_paddle_y(paddle.y, config.paddle_height);
        } else {
            if input.up {
                paddle.y -= config.paddle_speed;
                paddle.y = arena.clamp_paddle_y(paddle.y, config.paddle_height);
            }
            if input.down {
                paddle.y += config.paddle_speed;
                paddle.y = arena.clamp_paddle_y(paddle.y, config.paddle_height);
            }
        }
    }
}
