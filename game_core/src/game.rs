use crate::render::{render, Scene};
use crate::{create_paddle, step, Ball, Config, Events, GameRng, InputState, Paddle, Score, Side};
use glam::Vec2;
use hecs::World;

/// A match between the human (left) and the computer (right).
///
/// Owns every piece of simulation state: the entities, the score, the
/// per-frame events and the serve RNG.
pub struct Match {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub frame: u64,
}

impl Match {
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let mut world = World::new();

        create_paddle(&mut world, Side::Left, config.paddle_start_y());
        create_paddle(&mut world, Side::Right, config.paddle_start_y());

        let mut ball = Ball::new(config.center(), Vec2::ZERO);
        let toward = rng.coin_flip();
        ball.serve(toward, &config, &mut rng);
        world.spawn((ball,));

        log::info!(
            "match started on {}x{} playfield, first serve toward {toward:?}",
            config.width,
            config.height
        );

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            frame: 0,
        }
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &mut InputState) -> &Events {
        step(
            &mut self.world,
            &self.config,
            input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.frame += 1;
        &self.events
    }

    /// Zero both scores and serve a fresh ball to a random side.
    /// Paddles stay where they are.
    pub fn restart(&mut self) {
        self.score.reset();
        self.events.clear();

        let toward = self.rng.coin_flip();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(toward, &self.config, &mut self.rng);
        }

        log::info!("match restarted, serve toward {toward:?}");
    }

    /// Drawable frame for the current state
    pub fn scene(&self) -> Scene {
        render(&self.world, &self.config)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, b)| *b)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    /// Overwrite the ball's state; used to set up scenarios
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            *ball = Ball::new(pos, vel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_match() -> Match {
        Match::new(Config::new(), GameRng::new(2024))
    }

    #[test]
    fn test_new_match_layout() {
        let game = new_match();
        let config = &game.config;

        assert_eq!(game.score, Score::new());
        assert_eq!(game.frame, 0);
        assert_eq!(game.paddle(Side::Left).unwrap().y, config.paddle_start_y());
        assert_eq!(game.paddle(Side::Right).unwrap().y, config.paddle_start_y());

        let ball = game.ball().unwrap();
        assert_eq!(ball.pos, config.center());
        assert_eq!(ball.speed, config.ball_speed_base);
        assert!(ball.vel.x != 0.0);
    }

    #[test]
    fn test_tick_counts_frames() {
        let mut game = new_match();
        let mut input = InputState::new();
        for _ in 0..5 {
            game.tick(&mut input);
        }
        assert_eq!(game.frame, 5);
    }

    #[test]
    fn test_restart_mid_rally() {
        let mut game = new_match();
        game.score.player = 3;
        game.score.opponent = 7;
        game.set_ball(Vec2::new(100.0, 60.0), Vec2::new(-9.0, 4.0));
        let paddle_before = game.paddle(Side::Left).unwrap().y;

        game.restart();

        assert_eq!(game.score, Score::new());
        let ball = game.ball().unwrap();
        assert_eq!(ball.pos, game.config.center());
        assert_eq!(ball.speed, game.config.ball_speed_base);
        assert_eq!(game.paddle(Side::Left).unwrap().y, paddle_before);
    }

    #[test]
    fn test_set_ball_tracks_speed() {
        let mut game = new_match();
        game.set_ball(Vec2::new(10.0, 20.0), Vec2::new(3.0, 4.0));
        let ball = game.ball().unwrap();
        assert_eq!(ball.speed, 5.0);
    }
}
