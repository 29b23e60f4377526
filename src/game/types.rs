//! Flappy Bird data structures.
//!
//! All simulation state lives in [`GameSession`]; coordinates are logical
//! pixels on a fixed 500x500 field, independent of terminal size.

use crate::constants::{BIRD_START_Y, GAP_TOP_MAX, GAP_TOP_MIN, PIPE_GAP, PIPE_SPAWN_X};
use rand::Rng;

/// A single pipe obstacle (top + bottom pair with a gap).
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge in logical pixels. Decreases every tick.
    pub x: f64,
    /// Top of the passable gap in logical pixels.
    pub gap_top: f64,
}

impl Pipe {
    /// Bottom of the passable gap.
    pub fn gap_bottom(&self) -> f64 {
        self.gap_top + PIPE_GAP
    }
}

/// Complete mutable state of one playthrough.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Bird vertical position in logical pixels. Row 0 = top of field.
    pub bird_y: f64,
    /// Bird vertical velocity in pixels/tick (positive = downward).
    pub bird_velocity: f64,
    /// Active pipes in spawn order (oldest first, so descending x).
    pub pipes: Vec<Pipe>,
    /// Ticks survived this session.
    pub score: u32,
    /// One-way Active -> Over flag. Cleared only by [`GameSession::restart`].
    pub game_over: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Create a session in its initial Active state.
    pub fn new() -> Self {
        Self {
            bird_y: BIRD_START_Y,
            bird_velocity: 0.0,
            pipes: Vec::new(),
            score: 0,
            game_over: false,
        }
    }

    /// Re-initialize every field to the same state `new` produces.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Spawn a new pipe at the right edge with a random gap position.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        // Gap top stays within [100, 400) so the gap never clips the
        // field edges.
        let gap_top = rng.gen_range(GAP_TOP_MIN..GAP_TOP_MAX);
        self.pipes.push(Pipe {
            x: PIPE_SPAWN_X,
            gap_top,
        });
    }
}
