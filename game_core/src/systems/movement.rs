use crate::Ball;
use hecs::World;

/// Move ball based on velocity (explicit Euler, one step per tick).
///
/// No substeps: at very high speeds the ball can tunnel through a
/// paddle within a single tick. Accepted limit.
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    #[test]
    fn test_ball_advances_by_velocity() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(100.0, 200.0), Vec2::new(5.0, -3.0));

        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(105.0, 197.0));
            assert_eq!(ball.vel, Vec2::new(5.0, -3.0), "Velocity is untouched");
        }
    }
}
