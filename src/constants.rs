// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 20;

// Play field dimensions in logical pixels (y = 0 is the top edge)
pub const FIELD_WIDTH: f64 = 500.0;
pub const FIELD_HEIGHT: f64 = 500.0;

// Physics constants (per-tick)
pub const GRAVITY: f64 = 0.5;
pub const JUMP_VELOCITY: f64 = -10.0;

// Bird geometry
pub const BIRD_X: f64 = 50.0;
pub const BIRD_WIDTH: f64 = 30.0;
pub const BIRD_START_Y: f64 = 250.0;

// Pipe constants
pub const PIPE_SPEED: f64 = 2.0;
pub const PIPE_WIDTH: f64 = 50.0;
pub const PIPE_GAP: f64 = 150.0;
pub const PIPE_SPAWN_X: f64 = FIELD_WIDTH;
pub const PIPE_SPAWN_THRESHOLD: f64 = 300.0;
pub const GAP_TOP_MIN: f64 = 100.0;
pub const GAP_TOP_MAX: f64 = 400.0;
