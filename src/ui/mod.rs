pub mod app;
mod board;
mod dialogs;
mod hud;
pub mod scheduler;
mod state;
