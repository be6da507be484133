use crate::{Arena, Ball, Config, Events, GameRng, Score};
use hecs::World;

/// Check if the ball left the arena and award the goal.
///
/// Exited left means the ball's right edge cleared the edge entirely;
/// exited right uses the ball's left edge passing `width - size`. The
/// reset happens within the same tick: there is no serve delay.
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x + config.ball_size <= 0.0 {
            // Computer scores
            score.increment_computer();
            events.computer_scored = true;
            ball.reset(arena, config, rng);
        } else if ball.pos.x > arena.width - config.ball_size {
            // Player scores
            score.increment_player();
            events.player_scored = true;
            ball.reset(arena, config, rng);
        }
    }
}
