use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Steer the computer paddle toward the ball.
///
/// Purely reactive: the paddle center chases the ball's current Y at a
/// fixed speed and holds still inside the dead-zone.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = match world.query::<&Ball>().iter().next().map(|(_e, b)| b.pos.y) {
        Some(y) => y,
        None => return,
    };

    let speed = config.paddle_speed(Side::Right);
    let dead_zone = config.opponent_dead_zone;

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }

        let center = paddle.center_y(config);
        if center < ball_y - dead_zone {
            paddle.y += speed;
        } else if center > ball_y + dead_zone {
            paddle.y -= speed;
        }

        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}
