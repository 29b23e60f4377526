//! Game session state, per-tick update logic, and tick scheduling.

pub mod logic;
pub mod ticker;
pub mod types;
