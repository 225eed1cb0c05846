use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, info, trace};
use serde::Serialize;

use super::engine::Verdict;
use super::events::{CardView, GameEvent, Observer, Stats};
use super::schedule::Scheduler;
use super::shuffle::{RandomSource, RngSource};
use super::state::{Phase, Resolution, Reveal, RoundState};
use crate::config::GameConfig;

struct Inner {
    config: GameConfig,
    round: RefCell<RoundState>,
    rng: RefCell<Box<dyn RandomSource>>,
    scheduler: Rc<dyn Scheduler>,
    observers: RefCell<Vec<Rc<dyn Observer>>>,
    victory_shown: Cell<bool>,
}

#[derive(Serialize)]
struct Snapshot {
    phase: Phase,
    stats: Stats,
    board: Vec<CardView>,
}

/// Owns the round and is the only way to mutate it.
///
/// Cloning is cheap and every clone drives the same game. Delayed
/// resolutions hold a weak handle plus the round epoch they were scheduled
/// in; they do nothing once the controller is dropped or a new round began.
#[derive(Clone)]
pub struct GameController {
    inner: Rc<Inner>,
}

impl GameController {
    pub fn new(
        config: GameConfig,
        rng: impl RandomSource + 'static,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        GameController {
            inner: Rc::new(Inner {
                config,
                round: RefCell::new(RoundState::default()),
                rng: RefCell::new(Box::new(rng)),
                scheduler,
                observers: RefCell::new(Vec::new()),
                victory_shown: Cell::new(false),
            }),
        }
    }

    pub fn with_defaults(scheduler: Rc<dyn Scheduler>) -> Self {
        Self::new(GameConfig::default(), RngSource::thread(), scheduler)
    }

    pub fn config(&self) -> &GameConfig {
        &self.inner.config
    }

    pub fn subscribe(&self, observer: Rc<dyn Observer>) {
        self.inner.observers.borrow_mut().push(observer);
    }

    pub fn start_new_round(&self) {
        let epoch = {
            let mut rng = self.inner.rng.borrow_mut();
            let mut round = self.inner.round.borrow_mut();
            round.reset(&self.inner.config.symbols, &mut **rng);
            round.epoch
        };
        self.inner.victory_shown.set(false);
        info!(
            "round {} dealt with {} pairs",
            epoch,
            self.inner.config.total_pairs()
        );
        self.emit(&GameEvent::RoundReset);

        if self.phase() == Phase::Complete {
            self.announce_victory(0);
        }
    }

    /// Reveals a card. Returns `false` when the request was ignored.
    pub fn request_reveal(&self, card_id: usize) -> bool {
        let (outcome, epoch) = {
            let mut round = self.inner.round.borrow_mut();
            (round.reveal(card_id), round.epoch)
        };

        match outcome {
            Reveal::Ignored => {
                trace!("ignored reveal of card {card_id}");
                return false;
            }
            Reveal::Flipped => {
                debug!("card {card_id} face up");
                self.emit(&GameEvent::StateChanged);
            }
            Reveal::PairComplete(verdict) => {
                debug!("card {card_id} completes a pair: {verdict:?}");
                self.emit(&GameEvent::StateChanged);
                self.schedule_resolution(epoch, verdict);
            }
        }
        true
    }

    pub fn close_victory(&self) {
        if self.inner.victory_shown.replace(false) {
            self.emit(&GameEvent::VictoryDismissed);
        }
    }

    pub fn victory_visible(&self) -> bool {
        self.inner.victory_shown.get()
    }

    pub fn board_view(&self) -> Vec<CardView> {
        self.inner.round.borrow().deck.iter().map(CardView::from).collect()
    }

    pub fn stats(&self) -> Stats {
        let round = self.inner.round.borrow();
        Stats {
            moves: round.moves,
            matched_pairs: round.matched_pairs,
            total_pairs: round.total_pairs,
        }
    }

    pub fn phase(&self) -> Phase {
        self.inner.round.borrow().phase
    }

    pub fn accepting_input(&self) -> bool {
        self.inner.round.borrow().accepting_input()
    }

    pub fn pending_ids(&self) -> Vec<usize> {
        let round = self.inner.round.borrow();
        round.pending.iter().map(|&idx| round.deck[idx].id).collect()
    }

    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        let snapshot = Snapshot {
            phase: self.phase(),
            stats: self.stats(),
            board: self.board_view(),
        };
        serde_json::to_string(&snapshot)
    }

    fn schedule_resolution(&self, epoch: u64, verdict: Verdict) {
        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        let delay = verdict.delay(&self.inner.config);
        self.inner.scheduler.schedule_after(
            delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    GameController { inner }.finish_resolution(epoch, verdict);
                }
            }),
        );
    }

    fn finish_resolution(&self, epoch: u64, verdict: Verdict) {
        let resolution = self.inner.round.borrow_mut().resolve(epoch, verdict);
        match resolution {
            Resolution::Stale => {
                debug!("dropped {verdict:?} resolution from round {epoch}");
            }
            Resolution::Applied(_) => self.emit(&GameEvent::StateChanged),
            Resolution::Victory { final_moves } => {
                self.emit(&GameEvent::StateChanged);
                self.announce_victory(final_moves);
            }
        }
    }

    fn announce_victory(&self, final_moves: u32) {
        info!("round complete in {final_moves} moves");
        self.inner.victory_shown.set(true);
        self.emit(&GameEvent::Victory { final_moves });
    }

    fn emit(&self, event: &GameEvent) {
        let observers = self.inner.observers.borrow().clone();
        for observer in observers {
            observer.on_event(event);
        }
    }
}
