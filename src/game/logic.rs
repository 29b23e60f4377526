//! Per-tick update and input logic for the game session.

use crate::constants::{
    BIRD_WIDTH, BIRD_X, FIELD_HEIGHT, GRAVITY, JUMP_VELOCITY, PIPE_SPAWN_THRESHOLD, PIPE_SPEED,
    PIPE_WIDTH,
};
use crate::game::types::{GameSession, Pipe};
use rand::Rng;

/// Input actions for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    /// Jump (Space). Overwrites velocity with the fixed upward impulse.
    Jump,
    /// Restart from the game-over overlay.
    Restart,
    /// Any other key.
    Other,
}

/// Process player input for the session.
pub fn process_input(session: &mut GameSession, input: SessionInput) {
    match input {
        SessionInput::Jump => {
            // Impulse overwrites velocity rather than adding to it, so
            // rapid repeated presses each reapply the same value.
            if !session.game_over {
                session.bird_velocity = JUMP_VELOCITY;
            }
        }
        SessionInput::Restart => {
            if session.game_over {
                session.restart();
            }
        }
        SessionInput::Other => {}
    }
}

/// Process one 20ms game tick: integration, gravity, pipe scrolling and
/// spawning, scoring, and collision detection.
///
/// A no-op once the session is Over. When a step flags game-over mid-tick,
/// the remaining steps of that tick still run, so the ending tick applies
/// gravity and counts toward the score like any other.
pub fn process_tick<R: Rng>(session: &mut GameSession, rng: &mut R) {
    if session.game_over {
        return;
    }

    // Integrate position; the boundary check uses the new position.
    session.bird_y += session.bird_velocity;
    if session.bird_y < 0.0 || session.bird_y > FIELD_HEIGHT {
        session.game_over = true;
    }

    // Gravity applies every tick, including the tick that ends the game.
    session.bird_velocity += GRAVITY;

    // Hit-testing uses pipe positions from before this tick's scroll.
    // One tick of lag, kept from the original behavior.
    let bird_y = session.bird_y;
    let hit = session.pipes.iter().any(|pipe| pipe_hits_bird(pipe, bird_y));

    // Scroll pipes left and drop any that are fully off screen.
    for pipe in &mut session.pipes {
        pipe.x -= PIPE_SPEED;
    }
    session.pipes.retain(|pipe| pipe.x > -PIPE_WIDTH);

    // Spawn a new pipe when none exist or the newest one has scrolled
    // past the spawn threshold.
    let should_spawn = match session.pipes.last() {
        None => true,
        Some(last) => last.x < PIPE_SPAWN_THRESHOLD,
    };
    if should_spawn {
        session.spawn_pipe(rng);
    }

    // Score counts ticks survived, not pipes passed.
    session.score += 1;

    if hit {
        session.game_over = true;
    }
}

/// Whether the bird collides with this pipe: horizontal spans overlap and
/// the bird sits strictly outside the gap.
fn pipe_hits_bird(pipe: &Pipe, bird_y: f64) -> bool {
    let horizontal_overlap = pipe.x < BIRD_X + BIRD_WIDTH && pipe.x + PIPE_WIDTH > BIRD_X;
    horizontal_overlap && (bird_y < pipe.gap_top || bird_y > pipe.gap_bottom())
}
