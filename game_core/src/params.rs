use std::f32::consts::{FRAC_PI_4, FRAC_PI_6};

/// Game tuning parameters for Pong.
///
/// Distances are playfield units (one unit per canvas pixel), speeds are
/// units per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_INSET: f32 = 20.0; // gap between paddle and side edge
    pub const PLAYER_SPEED: f32 = 6.0;
    pub const OPPONENT_SPEED: f32 = 4.0; // slower than the player so the game stays winnable
    pub const OPPONENT_DEAD_ZONE: f32 = 6.0;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED_BASE: f32 = 5.0;
    pub const PLAYER_HIT_SPEEDUP: f32 = 1.05;
    pub const OPPONENT_HIT_SPEEDUP: f32 = 1.03;
    pub const MAX_BOUNCE_ANGLE: f32 = FRAC_PI_4; // 45°
    pub const MAX_SERVE_ANGLE: f32 = FRAC_PI_6; // 30°

    // Center guide line
    pub const DASH_WIDTH: f32 = 2.0;
    pub const DASH_LENGTH: f32 = 14.0;
    pub const DASH_GAP: f32 = 10.0;
}
