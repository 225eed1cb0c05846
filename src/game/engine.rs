use std::time::Duration;

use serde::Serialize;

use super::card::Card;
use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Match,
    Mismatch,
}

impl Verdict {
    /// How long the pair stays on screen before the verdict is applied.
    pub fn delay(self, config: &GameConfig) -> Duration {
        match self {
            Verdict::Match => config.match_delay(),
            Verdict::Mismatch => config.mismatch_delay(),
        }
    }
}

pub fn judge(deck: &[Card], pending: &[usize]) -> Verdict {
    debug_assert_eq!(pending.len(), 2, "judging needs exactly two pending cards");
    let first = &deck[pending[0]].symbol;
    let second = &deck[pending[1]].symbol;
    if first == second {
        Verdict::Match
    } else {
        Verdict::Mismatch
    }
}

/// Applies a verdict to the two pending cards.
pub(super) fn apply(deck: &mut [Card], pending: &[usize], verdict: Verdict) {
    for &idx in pending {
        let card = &mut deck[idx];
        match verdict {
            Verdict::Match => card.matched = true,
            Verdict::Mismatch => card.revealed = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::card::build_deck;

    #[test]
    fn equal_symbols_match() {
        let deck = build_deck(&["A", "B"]);
        assert_eq!(judge(&deck, &[0, 2]), Verdict::Match);
        assert_eq!(judge(&deck, &[3, 1]), Verdict::Match);
    }

    #[test]
    fn different_symbols_mismatch() {
        let deck = build_deck(&["A", "B"]);
        assert_eq!(judge(&deck, &[0, 1]), Verdict::Mismatch);
    }

    #[test]
    fn mismatch_waits_longer() {
        let config = GameConfig::default();
        assert_eq!(Verdict::Match.delay(&config), Duration::from_millis(500));
        assert_eq!(Verdict::Mismatch.delay(&config), Duration::from_millis(1000));
    }

    #[test]
    fn apply_match_keeps_cards_up() {
        let mut deck = build_deck(&["A"]);
        for card in deck.iter_mut() {
            card.revealed = true;
        }
        apply(&mut deck, &[0, 1], Verdict::Match);
        assert!(deck.iter().all(|c| c.matched && c.revealed));
    }

    #[test]
    fn apply_mismatch_hides_cards() {
        let mut deck = build_deck(&["A", "B"]);
        deck[0].revealed = true;
        deck[1].revealed = true;
        apply(&mut deck, &[0, 1], Verdict::Mismatch);
        assert!(deck.iter().all(|c| !c.revealed && !c.matched));
    }
}
