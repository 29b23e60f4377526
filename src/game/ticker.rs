//! Fixed-period tick scheduling for the event loop.
//!
//! The event loop owns a [`Ticker`] and polls it each iteration; ticks fire
//! only between `start` and `stop`, so the scheduler guarantees no tick runs
//! after the session reaches game-over or the terminal is torn down.

use std::time::{Duration, Instant};

/// A poll-driven repeating timer with an explicit start/stop pair.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    last_tick: Option<Instant>,
}

impl Ticker {
    /// Create a stopped ticker with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_tick: None,
        }
    }

    /// Begin firing ticks. The first tick fires one full period from now.
    /// Starting an already-running ticker leaves its schedule unchanged.
    pub fn start(&mut self) {
        if self.last_tick.is_none() {
            self.last_tick = Some(Instant::now());
        }
    }

    /// Stop firing ticks. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.last_tick = None;
    }

    pub fn is_running(&self) -> bool {
        self.last_tick.is_some()
    }

    /// Whether a tick is due. Consumes the tick: returns true at most once
    /// per elapsed period.
    pub fn poll(&mut self) -> bool {
        match self.last_tick {
            Some(last) if last.elapsed() >= self.period => {
                self.last_tick = Some(Instant::now());
                true
            }
            _ => false,
        }
    }
}
