//! Flappy Bird data structures.

use super::spawner::Spawner;
use crate::config::GameConfig;

/// The player's bird. Its horizontal position is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    x: f64,
    /// Top edge in playfield units. Row 0 = ceiling, grows downward.
    pub y: f64,
    /// Vertical velocity in units/tick (positive = downward).
    pub velocity: f64,
    width: f64,
    height: f64,
}

impl Bird {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            width,
            height,
        }
    }

    /// A resting bird at the anchor column, vertically centered.
    pub fn spawn(config: &GameConfig) -> Self {
        Self::new(
            config.bird_x,
            config.bird_start_y(),
            config.bird_width,
            config.bird_height,
        )
    }

    /// Apply one tick of gravity. Out-of-bounds positions are left for the
    /// collision check to catch.
    pub fn update(&mut self, gravity: f64) {
        self.velocity += gravity;
        self.y += self.velocity;
    }

    /// Replace the current velocity with the jump impulse.
    pub fn jump(&mut self, impulse: f64) {
        self.velocity = impulse;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A pipe pair: a top pipe ending at `gap_top` and a bottom pipe starting
/// `gap` units below it.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    /// Distance from the ceiling to the top of the gap.
    pub gap_top: f64,
    pub width: f64,
    pub gap: f64,
    /// Whether the bird has passed this pipe (for scoring).
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: f64, gap_top: f64, width: f64, gap: f64) -> Self {
        Self {
            x,
            gap_top,
            width,
            gap,
            scored: false,
        }
    }

    pub fn update(&mut self, speed: f64) {
        self.x -= speed;
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn gap_bottom(&self) -> f64 {
        self.gap_top + self.gap
    }
}

/// Session phase. Only `Running` advances the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start screen, bird resting at the center.
    Idle,
    Running,
    /// Last frame frozen under the game-over overlay.
    Over,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub config: GameConfig,
    pub phase: Phase,
    pub bird: Bird,
    /// Active pipes, oldest first.
    pub pipes: Vec<Pipe>,
    /// Pipes passed this run.
    pub score: u32,
    /// Best score seen, as loaded at startup and raised at the end of a run.
    pub high_score: u32,
    pub spawner: Spawner,
    /// Ticks simulated this run.
    pub tick_count: u64,
}

impl FlappyGame {
    pub fn new(config: GameConfig, high_score: u32) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            bird: Bird::spawn(&config),
            pipes: Vec::new(),
            score: 0,
            high_score,
            spawner: Spawner::new(config.spawn_interval),
            tick_count: 0,
        }
    }

    /// Back to the start screen with a fresh bird. The high score survives.
    pub fn reset(&mut self) {
        self.bird = Bird::spawn(&self.config);
        self.pipes.clear();
        self.score = 0;
        self.spawner.reset();
        self.tick_count = 0;
        self.phase = Phase::Idle;
    }
}
