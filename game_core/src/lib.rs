pub mod arena;
pub mod components;
pub mod config;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the Pong simulation by one tick.
///
/// The order of systems matters: collisions must see the ball position
/// already advanced this tick, and scoring must see the post-collision
/// position. Speeds are expressed in logical units per tick.
pub fn step(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    input: &PaddleInput,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Apply human input to the player paddle
    apply_player_input(world, arena, config, input);

    // 2. Computer paddle tracks the ball
    drive_computer_paddle(world, arena, config);

    // 3. Move ball
    move_ball(world);

    // 4/5/6. Check collisions (ball vs walls, then paddles)
    check_collisions(world, arena, config, events);

    // 7. Check scoring (ball exited arena)
    check_scoring(world, arena, config, score, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Spawn a fresh match: both paddles centered, ball served from center.
pub fn spawn_match(world: &mut World, arena: &Arena, config: &Config, rng: &mut GameRng) {
    let paddle_y = (arena.height - config.paddle_height) / 2.0;
    create_paddle(world, Side::Player, paddle_y);
    create_paddle(world, Side::Computer, paddle_y);

    let mut ball = Ball::new(glam::Vec2::ZERO, glam::Vec2::ZERO);
    ball.reset(arena, config, rng);
    world.spawn((ball,));
}
