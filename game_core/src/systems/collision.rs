use crate::math::{bounce_angle, velocity_from_angle};
use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data first so the ball can be borrowed mutably
    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    // Left is always resolved before right
    paddles.sort_by_key(|(side, _)| *side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        bounce_off_walls(ball, config, events);

        for &(side, paddle_y) in &paddles {
            if bounce_off_paddle(ball, side, paddle_y, config) {
                events.paddle_hit = true;
            }
        }
    }
}

/// Reflect off the top and bottom walls, pinning the ball to the boundary
fn bounce_off_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    let r = config.ball_radius;

    if ball.pos.y - r <= 0.0 {
        ball.pos.y = r;
        ball.vel.y = -ball.vel.y;
        events.wall_hit = true;
    }
    if ball.pos.y + r >= config.height {
        ball.pos.y = config.height - r;
        ball.vel.y = -ball.vel.y;
        events.wall_hit = true;
    }
}

/// Resolve a hit against the paddle on `side`.
///
/// Interval test only: the leading edge must have reached the paddle face
/// and the ball center must lie within the paddle's vertical span. A fast
/// ball can pass a paddle edge between frames.
fn bounce_off_paddle(ball: &mut Ball, side: Side, paddle_y: f32, config: &Config) -> bool {
    let r = config.ball_radius;
    let paddle_x = config.paddle_x(side);

    let reached = match side {
        Side::Left => ball.pos.x - r <= paddle_x + config.paddle_width,
        Side::Right => ball.pos.x + r >= paddle_x,
    };
    let within_span = ball.pos.y >= paddle_y && ball.pos.y <= paddle_y + config.paddle_height;
    if !reached || !within_span {
        return false;
    }

    let angle = bounce_angle(
        ball.pos.y,
        paddle_y,
        config.paddle_height,
        config.max_bounce_angle,
    );
    ball.speed *= config.hit_speedup(side);
    ball.vel = velocity_from_angle(ball.speed, angle, side.opposite().direction());

    // Place the ball just off the paddle face so it can't re-trigger
    ball.pos.x = match side {
        Side::Left => paddle_x + config.paddle_width + r,
        Side::Right => paddle_x - r,
    };

    log::trace!("ball hit {side:?} paddle, speed now {}", ball.speed);
    true
}
