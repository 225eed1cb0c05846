//! Memory-matching card game.
//!
//! The `game` module is the whole rules engine and knows nothing about
//! rendering. Delays go through an injected [`game::Scheduler`], shuffling
//! through an injected [`game::RandomSource`], and front ends follow the
//! round through [`game::Observer`] events. The GTK front end lives in
//! `ui` behind the `gui` feature.

pub mod config;
pub mod error;
pub mod game;

#[cfg(feature = "gui")]
pub mod ui;

pub use config::GameConfig;
pub use error::ConfigError;
pub use game::GameController;
