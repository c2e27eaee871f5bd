//! Score text outputs

use game_core::Score;
use web_sys::Element;

pub struct ScoreBoard {
    player: Element,
    opponent: Element,
}

impl ScoreBoard {
    pub fn new(player: Element, opponent: Element) -> Self {
        Self { player, opponent }
    }

    pub fn show(&self, score: &Score) {
        self.player.set_text_content(Some(&score.player.to_string()));
        self.opponent.set_text_content(Some(&score.opponent.to_string()));
    }
}
