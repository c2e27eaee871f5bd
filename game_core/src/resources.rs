use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,   // Left, human
    pub opponent: u32, // Right, computer
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one point to `side`
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.player += 1,
            Side::Right => self.opponent += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.player,
            Side::Right => self.opponent,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Pick a side with equal odds
    pub fn coin_flip(&mut self) -> Side {
        use rand::Rng;
        if self.0.gen_bool(0.5) {
            Side::Right
        } else {
            Side::Left
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub paddle_hit: bool,
    pub wall_hit: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the score changed this frame
    pub fn scored(&self) -> bool {
        self.player_scored || self.opponent_scored
    }
}

/// Logical movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Up,
    Down,
}

impl InputKey {
    /// Map a DOM `KeyboardEvent.key` name
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(InputKey::Up),
            "ArrowDown" | "s" | "S" => Some(InputKey::Down),
            _ => None,
        }
    }
}

/// Input written by the host's event handlers between frames and read
/// once per frame by the simulation.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointer_y: Option<f32>, // Latest pointer position in playfield units
    pub up: bool,
    pub down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move; only the latest one per frame is kept
    pub fn set_pointer(&mut self, y: f32) {
        self.pointer_y = Some(y);
    }

    /// Consume the pending pointer target, if any
    pub fn take_pointer(&mut self) -> Option<f32> {
        self.pointer_y.take()
    }

    pub fn press(&mut self, key: InputKey) {
        self.set_held(key, true);
    }

    pub fn release(&mut self, key: InputKey) {
        self.set_held(key, false);
    }

    fn set_held(&mut self, key: InputKey, held: bool) {
        match key {
            InputKey::Up => self.up = held,
            InputKey::Down => self.down = held,
        }
    }

    /// Net key direction: -1 = up, 0 = none, 1 = down
    pub fn key_dir(&self) -> i8 {
        self.down as i8 - self.up as i8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Right);
        score.increment(Side::Right);
        score.increment(Side::Left);
        assert_eq!(score.opponent, 2);
        assert_eq!(score.player, 1);
        assert_eq!(score.get(Side::Right), 2);
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score {
            player: 4,
            opponent: 9,
        };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_scored = true;
        events.opponent_scored = true;
        events.paddle_hit = true;
        events.wall_hit = true;
        assert!(events.scored());

        events.clear();

        assert!(!events.player_scored);
        assert!(!events.opponent_scored);
        assert!(!events.paddle_hit);
        assert!(!events.wall_hit);
        assert!(!events.scored());
    }

    #[test]
    fn test_key_names() {
        assert_eq!(InputKey::from_key_name("ArrowUp"), Some(InputKey::Up));
        assert_eq!(InputKey::from_key_name("W"), Some(InputKey::Up));
        assert_eq!(InputKey::from_key_name("ArrowDown"), Some(InputKey::Down));
        assert_eq!(InputKey::from_key_name("s"), Some(InputKey::Down));
        assert_eq!(InputKey::from_key_name("Enter"), None);
    }

    #[test]
    fn test_held_keys() {
        let mut input = InputState::new();
        assert_eq!(input.key_dir(), 0);
        input.press(InputKey::Up);
        assert_eq!(input.key_dir(), -1);
        input.press(InputKey::Down);
        assert_eq!(input.key_dir(), 0);
        input.release(InputKey::Up);
        assert_eq!(input.key_dir(), 1);
    }

    #[test]
    fn test_pointer_is_consumed() {
        let mut input = InputState::new();
        input.set_pointer(10.0);
        input.set_pointer(42.0);
        assert_eq!(input.take_pointer(), Some(42.0));
        assert_eq!(input.take_pointer(), None);
    }

    #[test]
    fn test_coin_flip_hits_both_sides() {
        let mut rng = GameRng::new(1);
        let flips: Vec<Side> = (0..64).map(|_| rng.coin_flip()).collect();
        assert!(flips.contains(&Side::Left));
        assert!(flips.contains(&Side::Right));
    }
}
