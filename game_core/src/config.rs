use crate::math::clamp;
use crate::{Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub player_speed: f32,
    pub opponent_speed: f32,
    pub opponent_dead_zone: f32,
    pub ball_radius: f32,
    pub ball_speed_base: f32,
    pub player_hit_speedup: f32,
    pub opponent_hit_speedup: f32,
    pub max_bounce_angle: f32,
    pub max_serve_angle: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::PLAYFIELD_WIDTH,
            height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            player_speed: Params::PLAYER_SPEED,
            opponent_speed: Params::OPPONENT_SPEED,
            opponent_dead_zone: Params::OPPONENT_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_base: Params::BALL_SPEED_BASE,
            player_hit_speedup: Params::PLAYER_HIT_SPEEDUP,
            opponent_hit_speedup: Params::OPPONENT_HIT_SPEEDUP,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            max_serve_angle: Params::MAX_SERVE_ANGLE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a playfield sized to the drawing surface
    pub fn for_playfield(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Left edge X of the paddle on `side`
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Per-frame move speed of the paddle on `side`
    pub fn paddle_speed(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.player_speed,
            Side::Right => self.opponent_speed,
        }
    }

    /// Speed multiplier applied when the ball bounces off the paddle on `side`
    pub fn hit_speedup(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.player_hit_speedup,
            Side::Right => self.opponent_hit_speedup,
        }
    }

    /// Largest legal paddle top edge
    pub fn max_paddle_y(&self) -> f32 {
        self.height - self.paddle_height
    }

    /// Clamp a paddle's top edge into `[0, height - paddle_height]`
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        clamp(y, 0.0, self.max_paddle_y())
    }

    /// Top edge that centers a paddle vertically
    pub fn paddle_start_y(&self) -> f32 {
        (self.height - self.paddle_height) / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
