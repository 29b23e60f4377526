//! Flap - Terminal Flappy Bird
//!
//! This module exposes the game logic for testing and external use.

pub mod constants;
pub mod game;
pub mod ui;

pub use constants::TICK_INTERVAL_MS;
pub use game::types::GameSession;
