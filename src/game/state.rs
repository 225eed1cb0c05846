use serde::Serialize;

use super::card::{Card, build_deck};
use super::engine::{self, Verdict};
use super::shuffle::{RandomSource, shuffle};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Resolving,
    Complete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reveal {
    Ignored,
    Flipped,
    PairComplete(Verdict),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Stale,
    Applied(Verdict),
    Victory { final_moves: u32 },
}

#[derive(Clone, Debug, Default)]
pub struct RoundState {
    pub deck: Vec<Card>,
    pub pending: Vec<usize>,
    pub moves: u32,
    pub matched_pairs: u32,
    pub total_pairs: u32,
    pub phase: Phase,
    pub epoch: u64,
}

impl RoundState {
    /// Throws the previous round away and deals a fresh one.
    pub fn reset<S: AsRef<str>>(&mut self, symbols: &[S], rng: &mut dyn RandomSource) {
        self.epoch = self.epoch.wrapping_add(1);
        self.pending.clear();
        self.moves = 0;
        self.matched_pairs = 0;
        self.total_pairs = symbols.len() as u32;

        let mut deck = build_deck(symbols);
        shuffle(&mut deck, rng);
        self.deck = deck;

        self.phase = if self.total_pairs == 0 {
            Phase::Complete
        } else {
            Phase::Idle
        };
    }

    pub fn accepting_input(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn position_of(&self, card_id: usize) -> Option<usize> {
        self.deck.iter().position(|card| card.id == card_id)
    }

    pub fn card(&self, card_id: usize) -> Option<&Card> {
        self.deck.iter().find(|card| card.id == card_id)
    }

    pub fn reveal(&mut self, card_id: usize) -> Reveal {
        if !self.accepting_input() || self.pending.len() >= 2 {
            return Reveal::Ignored;
        }
        let Some(idx) = self.position_of(card_id) else {
            return Reveal::Ignored;
        };
        if self.deck[idx].revealed || self.deck[idx].matched {
            return Reveal::Ignored;
        }

        self.deck[idx].revealed = true;
        self.pending.push(idx);

        if self.pending.len() < 2 {
            return Reveal::Flipped;
        }

        self.moves += 1;
        self.phase = Phase::Resolving;
        Reveal::PairComplete(engine::judge(&self.deck, &self.pending))
    }

    /// Applies the verdict for the pending pair if `epoch` is still current.
    pub fn resolve(&mut self, epoch: u64, verdict: Verdict) -> Resolution {
        if epoch != self.epoch || self.phase != Phase::Resolving {
            return Resolution::Stale;
        }
        debug_assert_eq!(self.pending.len(), 2, "resolving without a full pair");
        if self.pending.len() != 2 {
            return Resolution::Stale;
        }

        let pending = std::mem::take(&mut self.pending);
        engine::apply(&mut self.deck, &pending, verdict);
        self.phase = Phase::Idle;

        if verdict == Verdict::Match {
            self.matched_pairs += 1;
            if self.matched_pairs == self.total_pairs {
                self.phase = Phase::Complete;
                return Resolution::Victory {
                    final_moves: self.moves,
                };
            }
        }
        Resolution::Applied(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::shuffle::ScriptedRandom;

    fn dealt(symbols: &[&str]) -> RoundState {
        let mut st = RoundState::default();
        st.reset(symbols, &mut ScriptedRandom::identity(symbols.len() * 2));
        st
    }

    #[test]
    fn reset_deals_fresh_round() {
        let st = dealt(&["A", "B"]);
        assert_eq!(st.deck.len(), 4);
        assert_eq!(st.total_pairs, 2);
        assert_eq!(st.phase, Phase::Idle);
        assert_eq!(st.epoch, 1);
        assert!(st.accepting_input());
    }

    #[test]
    fn reset_bumps_epoch_and_clears_progress() {
        let mut st = dealt(&["A", "B"]);
        st.reveal(0);
        st.reveal(2);
        st.reset(&["A", "B"], &mut ScriptedRandom::identity(4));
        assert_eq!(st.epoch, 2);
        assert_eq!(st.moves, 0);
        assert!(st.pending.is_empty());
        assert!(st.deck.iter().all(|c| !c.revealed));
    }

    #[test]
    fn empty_catalog_is_complete_immediately() {
        let st = dealt(&[]);
        assert_eq!(st.phase, Phase::Complete);
        assert_eq!(st.total_pairs, 0);
        assert!(!st.accepting_input());
    }

    #[test]
    fn first_reveal_flips_without_a_move() {
        let mut st = dealt(&["A", "B"]);
        assert_eq!(st.reveal(1), Reveal::Flipped);
        assert_eq!(st.moves, 0);
        assert_eq!(st.pending, vec![1]);
        assert!(st.deck[1].revealed);
    }

    #[test]
    fn second_reveal_counts_a_move() {
        let mut st = dealt(&["A", "B"]);
        st.reveal(0);
        assert_eq!(st.reveal(1), Reveal::PairComplete(Verdict::Mismatch));
        assert_eq!(st.moves, 1);
        assert_eq!(st.phase, Phase::Resolving);
    }

    #[test]
    fn repeated_and_unknown_reveals_are_ignored() {
        let mut st = dealt(&["A", "B"]);
        st.reveal(0);
        assert_eq!(st.reveal(0), Reveal::Ignored);
        assert_eq!(st.reveal(99), Reveal::Ignored);
        assert_eq!(st.pending, vec![0]);
        assert_eq!(st.moves, 0);
    }

    #[test]
    fn reveals_while_resolving_are_ignored() {
        let mut st = dealt(&["A", "B"]);
        st.reveal(0);
        st.reveal(1);
        assert_eq!(st.reveal(2), Reveal::Ignored);
        assert!(!st.deck[2].revealed);
        assert_eq!(st.moves, 1);
    }

    #[test]
    fn stale_epoch_does_not_resolve() {
        let mut st = dealt(&["A", "B"]);
        st.reveal(0);
        st.reveal(2);
        let old_epoch = st.epoch;
        st.reset(&["A", "B"], &mut ScriptedRandom::identity(4));
        assert_eq!(st.resolve(old_epoch, Verdict::Match), Resolution::Stale);
        assert_eq!(st.matched_pairs, 0);
    }

    #[test]
    fn matched_cards_cannot_be_revealed_again() {
        let mut st = dealt(&["A", "B"]);
        st.reveal(0);
        st.reveal(2);
        let epoch = st.epoch;
        assert_eq!(st.resolve(epoch, Verdict::Match), Resolution::Applied(Verdict::Match));
        assert!(st.deck[0].matched && st.deck[0].revealed);
        assert_eq!(st.reveal(0), Reveal::Ignored);
        assert_eq!(st.reveal(2), Reveal::Ignored);
    }

    #[test]
    fn last_match_completes_round() {
        let mut st = dealt(&["A"]);
        st.reveal(0);
        st.reveal(1);
        let epoch = st.epoch;
        assert_eq!(
            st.resolve(epoch, Verdict::Match),
            Resolution::Victory { final_moves: 1 }
        );
        assert_eq!(st.phase, Phase::Complete);
        assert_eq!(st.reveal(0), Reveal::Ignored);
    }
}
