use serde::Serialize;

use super::card::Card;

/// What a renderer needs to draw one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: usize,
    /// `None` while the card is face-down.
    pub symbol: Option<String>,
    pub face_up: bool,
    pub matched: bool,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        let face_up = card.is_face_up();
        CardView {
            id: card.id,
            symbol: face_up.then(|| card.symbol.clone()),
            face_up,
            matched: card.matched,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    pub moves: u32,
    pub matched_pairs: u32,
    pub total_pairs: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    RoundReset,
    StateChanged,
    Victory { final_moves: u32 },
    VictoryDismissed,
}

pub trait Observer {
    fn on_event(&self, event: &GameEvent);
}

impl<F: Fn(&GameEvent)> Observer for F {
    fn on_event(&self, event: &GameEvent) {
        self(event)
    }
}
