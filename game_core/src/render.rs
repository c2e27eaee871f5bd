//! Render step: turns simulation state into a drawable scene
//!
//! The scene is plain data so any surface (GPU, test recorder) can present it.

use crate::{Ball, Config, Paddle, Params};
use hecs::World;

/// Straight (non-premultiplied) RGBA in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const GUIDE: Color = Color::rgba(1.0, 1.0, 1.0, 0.06);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Filled axis-aligned rectangle, `(x, y)` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Color,
}

/// Filled circle around `(x, y)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub color: Color,
}

/// One frame's worth of drawing, in paint order: clear, rects, circles
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub clear: Color,
    pub rects: Vec<Rect>,
    pub circles: Vec<Circle>,
}

/// Build the frame for the current state. Never mutates the world.
pub fn render(world: &World, config: &Config) -> Scene {
    let mut rects: Vec<Rect> = center_line(config).collect();

    let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    paddles.sort_by_key(|p| p.side);
    rects.extend(paddles.iter().map(|p| Rect {
        x: config.paddle_x(p.side),
        y: p.y,
        w: config.paddle_width,
        h: config.paddle_height,
        color: Color::WHITE,
    }));

    let circles = world
        .query::<&Ball>()
        .iter()
        .map(|(_e, b)| Circle {
            x: b.pos.x,
            y: b.pos.y,
            r: config.ball_radius,
            color: Color::WHITE,
        })
        .collect();

    Scene {
        width: config.width,
        height: config.height,
        clear: Color::BLACK,
        rects,
        circles,
    }
}

/// Dashes of the vertical guide line down the middle of the playfield
pub fn center_line(config: &Config) -> impl Iterator<Item = Rect> {
    let x = config.width / 2.0 - Params::DASH_WIDTH / 2.0;
    let height = config.height;
    let pitch = Params::DASH_LENGTH + Params::DASH_GAP;

    (0..)
        .map(move |i| i as f32 * pitch)
        .take_while(move |y| *y < height)
        .map(move |y| Rect {
            x,
            y,
            w: Params::DASH_WIDTH,
            h: Params::DASH_LENGTH,
            color: Color::GUIDE,
        })
}
