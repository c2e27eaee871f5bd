use crate::math::velocity_from_angle;
use crate::{Config, GameRng};
use glam::Vec2;
use rand::Rng;

/// Which half of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,  // human player
    Right, // computer opponent
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction of travel toward this side
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Paddle component - fixed X per side, only the top edge moves
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge (clamped to playfield)
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32, // Magnitude of `vel`, grows on paddle hits
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            speed: vel.length(),
        }
    }

    /// Re-serve from the center toward `toward` at base speed.
    ///
    /// The angle is drawn uniformly from `[-max_serve_angle, max_serve_angle)`.
    pub fn serve(&mut self, toward: Side, config: &Config, rng: &mut GameRng) {
        let max = config.max_serve_angle;
        let angle: f32 = rng.0.gen_range(-max..max);

        self.pos = config.center();
        self.speed = config.ball_speed_base;
        self.vel = velocity_from_angle(self.speed, angle, toward.direction());
    }
}
