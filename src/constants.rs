// Playfield
pub const PLAYFIELD_WIDTH: f64 = 600.0;
pub const PLAYFIELD_HEIGHT: f64 = 660.0;
pub const GROUND_HEIGHT: f64 = 100.0;
pub const GRASS_HEIGHT: f64 = 20.0;

// Bird
pub const BIRD_ANCHOR_X: f64 = 150.0;
pub const BIRD_WIDTH: f64 = 40.0;
pub const BIRD_HEIGHT: f64 = 30.0;
pub const GRAVITY: f64 = 0.25;
pub const JUMP_IMPULSE: f64 = -6.5;

// Pipes
pub const PIPE_WIDTH: f64 = 70.0;
pub const PIPE_GAP: f64 = 200.0;
pub const PIPE_SPEED: f64 = 2.6;
pub const PIPE_LIP_HEIGHT: f64 = 20.0;
pub const PIPE_LIP_OVERHANG: f64 = 5.0;
pub const PIPE_SPAWN_INTERVAL: u32 = 140;
/// Smallest distance between the top of the playfield and a gap.
pub const GAP_TOP_MARGIN: u32 = 50;
/// Vertical space reserved below the lowest possible gap, on top of the ground.
pub const GAP_BOTTOM_RESERVE: u32 = 100;

// Frame timing
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS, one tick per frame

// Files under the data directory
pub const DATA_DIR_NAME: &str = ".flappy";
pub const CONFIG_FILE: &str = "config.json";
pub const HIGH_SCORE_FILE: &str = "highscore.txt";
pub const USERS_FILE: &str = "users.txt";
pub const LOG_FILE: &str = "flappy.log";
