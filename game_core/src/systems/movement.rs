use crate::Ball;
use hecs::World;

/// Advance the ball by one frame of velocity
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
    fn test_ball_moves_by_velocity() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(5.0, -3.0));

        move_ball(&mut world);
        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(110.0, 94.0));
            assert_eq!(ball.vel, Vec2::new(5.0, -3.0));
        }
    }
}
