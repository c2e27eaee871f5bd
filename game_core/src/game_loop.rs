//! Frame-driven loop: update, then render, then wait for the next frame
//!
//! The frame source is injected. In the browser each animation-frame
//! callback calls [`GameLoop::frame`]; tests use [`FixedTicks`] with
//! [`GameLoop::run`] for deterministic runs.

use crate::render::Scene;
use crate::{Events, InputState, Match};

/// Somewhere a finished frame can be shown
pub trait Surface {
    type Error;

    fn present(&mut self, scene: &Scene) -> Result<(), Self::Error>;
}

/// Source of frame signals
pub trait FrameClock {
    /// Block (or not) until the next frame is due; `false` ends the run
    fn next_frame(&mut self) -> bool;
}

/// Clock that yields a fixed number of frames, then stops
#[derive(Debug, Clone, Copy)]
pub struct FixedTicks {
    remaining: u64,
}

impl FixedTicks {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl FrameClock for FixedTicks {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    AwaitingFrame,
}

pub struct GameLoop {
    game: Match,
    state: LoopState,
}

impl GameLoop {
    pub fn new(game: Match) -> Self {
        Self {
            game,
            state: LoopState::AwaitingFrame,
        }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Match {
        &mut self.game
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run one frame to completion: simulate, then present.
    ///
    /// Surface errors are returned as-is; the simulation has already
    /// advanced when that happens.
    pub fn frame<S: Surface>(
        &mut self,
        input: &mut InputState,
        surface: &mut S,
    ) -> Result<&Events, S::Error> {
        self.state = LoopState::Running;
        self.game.tick(input);

        let scene = self.game.scene();
        let presented = surface.present(&scene);
        self.state = LoopState::AwaitingFrame;
        presented?;

        Ok(&self.game.events)
    }

    /// Drive frames until the clock stops; returns the number of frames run
    pub fn run<C: FrameClock, S: Surface>(
        &mut self,
        clock: &mut C,
        input: &mut InputState,
        surface: &mut S,
    ) -> Result<u64, S::Error> {
        let mut frames = 0;
        while clock.next_frame() {
            self.frame(input, surface)?;
            frames += 1;
        }
        Ok(frames)
    }

    /// External restart; the loop keeps running as before
    pub fn restart(&mut self) {
        self.game.restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, GameRng};

    #[derive(Default)]
    struct CountingSurface {
        presented: usize,
    }

    impl Surface for CountingSurface {
        type Error = ();

        fn present(&mut self, _scene: &Scene) -> Result<(), ()> {
            self.presented += 1;
            Ok(())
        }
    }

    struct BrokenSurface;

    impl Surface for BrokenSurface {
        type Error = String;

        fn present(&mut self, _scene: &Scene) -> Result<(), String> {
            Err("surface lost".to_string())
        }
    }

    fn new_loop() -> GameLoop {
        GameLoop::new(Match::new(Config::new(), GameRng::new(5)))
    }

    #[test]
    fn test_fixed_ticks_counts_down() {
        let mut clock = FixedTicks::new(2);
        assert!(clock.next_frame());
        assert!(clock.next_frame());
        assert!(!clock.next_frame());
        assert!(!clock.next_frame());
    }

    #[test]
    fn test_run_presents_every_frame() {
        let mut game_loop = new_loop();
        let mut surface = CountingSurface::default();
        let mut input = InputState::new();

        let frames = game_loop
            .run(&mut FixedTicks::new(30), &mut input, &mut surface)
            .unwrap();

        assert_eq!(frames, 30);
        assert_eq!(surface.presented, 30);
        assert_eq!(game_loop.game().frame, 30);
        assert_eq!(game_loop.state(), LoopState::AwaitingFrame);
    }

    #[test]
    fn test_surface_error_propagates() {
        let mut game_loop = new_loop();
        let mut input = InputState::new();

        let result = game_loop.run(&mut FixedTicks::new(10), &mut input, &mut BrokenSurface);

        assert_eq!(result, Err("surface lost".to_string()));
        assert_eq!(game_loop.game().frame, 1, "Stops after the failing frame");
        assert_eq!(game_loop.state(), LoopState::AwaitingFrame);
    }

    #[test]
    fn test_restart_leaves_loop_state() {
        let mut game_loop = new_loop();
        let mut surface = CountingSurface::default();
        let mut input = InputState::new();
        game_loop.frame(&mut input, &mut surface).unwrap();
        game_loop.game_mut().score.opponent = 4;

        game_loop.restart();

        assert_eq!(game_loop.state(), LoopState::AwaitingFrame);
        assert_eq!(game_loop.game().score.opponent, 0);
        assert_eq!(game_loop.game().frame, 1);
    }
}
