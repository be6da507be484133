use crate::{Arena, Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles.
///
/// Walls are resolved first, then the player paddle, then the computer
/// paddle, all against the position the ball reached this tick. Wall
/// bounces are elastic. Paddle hits snap the ball flush to the paddle
/// face, flip the horizontal speed, and replace the vertical speed
/// with spin proportional to the contact offset from the paddle
/// center. A hit only registers when the ball is travelling toward
/// the paddle, so a ball already past the face cannot double-bounce
/// on its way back through.
pub fn check_collisions(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    // Collect paddle tops without holding a borrow across the ball query
    let mut player_y = None;
    let mut computer_y = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Player => player_y = Some(paddle.y),
            Side::Computer => computer_y = Some(paddle.y),
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom wall bounces
        if ball.pos.y < 0.0 {
            ball.pos.y = 0.0;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
        if ball.pos.y > arena.height - config.ball_size {
            ball.pos.y = arena.height - config.ball_size;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        // Player paddle (left): ball's left edge vs paddle's right edge
        if let Some(paddle_y) = player_y {
            let face_x = config.paddle_x(Side::Player, arena) + config.paddle_width;
            let overlaps_y = ball.pos.y + config.ball_size > paddle_y
                && ball.pos.y < paddle_y + config.paddle_height;

            if ball.vel.x < 0.0 && ball.pos.x < face_x && overlaps_y {
                ball.pos.x = face_x;
                ball.vel.x = -ball.vel.x;

                let offset =
                    ball.center_y(config.ball_size) - (paddle_y + config.paddle_height / 2.0);
                ball.vel.y = offset * config.spin_factor;
                events.ball_hit_paddle = true;
            }
        }

        // Computer paddle (right): ball's right edge vs paddle's left edge
        if let Some(paddle_y) = computer_y {
            let face_x = config.paddle_x(Side::Computer, arena);
            let overlaps_y = ball.pos.y + config.ball_size > paddle_y
                && ball.pos.y < paddle_y + config.paddle_height;

            if ball.vel.x > 0.0 && ball.pos.x + config.ball_size > face_x && overlaps_y {
                ball.pos.x = face_x - config.ball_size;
                ball.vel.x = -ball.vel.x;

                let offset =
                    ball.center_y(config.ball_size) - (paddle_y + config.paddle_height / 2.0);
                ball.vel.y = offset * config.spin_factor;
                events.ball_hit_paddle = true;
            }
        }
    }
}
