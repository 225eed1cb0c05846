pub mod card;
pub mod controller;
pub mod engine;
pub mod events;
pub mod schedule;
pub mod shuffle;
pub mod state;

pub use card::{Card, DEFAULT_SYMBOLS, build_deck};
pub use controller::GameController;
pub use engine::Verdict;
pub use events::{CardView, GameEvent, Observer, Stats};
pub use schedule::{ManualScheduler, Scheduler, Task};
pub use shuffle::{RandomSource, RngSource, ScriptedRandom, shuffle};
pub use state::{Phase, RoundState};
