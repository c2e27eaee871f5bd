//! Geometry helpers shared by the systems

use glam::Vec2;

/// Clamp `v` into `[lo, hi]`.
///
/// Unlike `f32::clamp` this never panics: when `lo > hi` the result is `lo`.
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    lo.max(hi.min(v))
}

/// Bounce angle for a ball striking a paddle at `ball_y`.
///
/// The hit offset from the paddle center is normalized to `[-1, 1]`
/// and scaled by `max_angle`. Positive angles point down.
pub fn bounce_angle(ball_y: f32, paddle_top: f32, paddle_height: f32, max_angle: f32) -> f32 {
    let half = paddle_height / 2.0;
    let rel = (ball_y - (paddle_top + half)) / half;
    rel * max_angle
}

/// Split a speed along `angle` from horizontal; `dir` is `1.0` for
/// rightward travel and `-1.0` for leftward.
pub fn velocity_from_angle(speed: f32, angle: f32, dir: f32) -> Vec2 {
    Vec2::new(dir * speed * angle.cos(), speed * angle.sin())
}

/// Map a pointer's vertical screen coordinate into playfield space.
///
/// `rect_top`/`rect_height` describe where the surface is displayed,
/// `surface_height` is its logical height.
pub fn pointer_to_playfield(
    client_y: f32,
    rect_top: f32,
    rect_height: f32,
    surface_height: f32,
) -> f32 {
    let scale = if rect_height > 0.0 {
        surface_height / rect_height
    } else {
        1.0
    };
    (client_y - rect_top) * scale
}
