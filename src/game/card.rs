use serde::Serialize;

pub const DEFAULT_SYMBOLS: [&str; 8] = ["🍎", "🍌", "🍇", "🍒", "🍉", "🥝", "🍍", "🍓"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: usize,
    pub symbol: String,
    pub revealed: bool,
    pub matched: bool,
}

impl Card {
    pub fn new(id: usize, symbol: impl Into<String>) -> Self {
        Card {
            id,
            symbol: symbol.into(),
            revealed: false,
            matched: false,
        }
    }

    pub fn is_face_up(&self) -> bool {
        self.revealed || self.matched
    }
}

/// Lays the catalog out twice in a row and numbers the cards by position.
///
/// Ids are assigned here, before any shuffling, so a card keeps its id for
/// the whole round no matter where it ends up on the board.
pub fn build_deck<S: AsRef<str>>(symbols: &[S]) -> Vec<Card> {
    symbols
        .iter()
        .chain(symbols.iter())
        .enumerate()
        .map(|(id, symbol)| Card::new(id, symbol.as_ref()))
        .collect()
}
