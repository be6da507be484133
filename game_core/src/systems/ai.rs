use crate::{Arena, Ball, Config, Paddle, Side};
use hecs::World;

/// Move the computer paddle toward the ball's vertical center.
///
/// The paddle only reacts when its center is outside a dead-zone
/// around the ball center, and moves at a fraction of the player
/// paddle speed. Both together keep the computer beatable; the lag is
/// intentional.
pub fn drive_computer_paddle(world: &mut World, arena: &Arena, config: &Config) {
    let ball_center = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| ball.center_y(config.ball_size))
    };

    let target = match ball_center {
        Some(y) => y,
        None => return, // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Computer {
            continue;
        }

        let center = paddle.center_y(config.paddle_height);
        let speed = config.paddle_speed * config.ai_speed_factor;

        if center < target - config.ai_dead_zone {
            paddle.y += speed;
        } else if center > target + config.ai_dead_zone {
            paddle.y -= speed;
        }

        paddle.y = arena.clamp_paddle_y(paddle.y, config.paddle_height);
    }
}
