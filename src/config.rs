//! Playfield and physics configuration.
//!
//! Every value defaults to the stock playfield. A `config.json` in the data
//! directory may override individual fields; missing fields keep their default.

use crate::constants::*;
use crate::utils::persistence::load_json_or_default;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::Path;

/// Shared immutable game configuration. Entities receive the values they need
/// from here instead of reading globals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f64,
    pub height: f64,
    pub ground_height: f64,
    pub bird_x: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    pub gravity: f64,
    pub jump_impulse: f64,
    pub pipe_width: f64,
    pub pipe_gap: f64,
    pub pipe_speed: f64,
    pub spawn_interval: u32,
    pub gap_top_margin: u32,
    pub gap_bottom_reserve: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            bird_x: BIRD_ANCHOR_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            spawn_interval: PIPE_SPAWN_INTERVAL,
            gap_top_margin: GAP_TOP_MARGIN,
            gap_bottom_reserve: GAP_BOTTOM_RESERVE,
        }
    }
}

impl GameConfig {
    /// Load from a JSON file, falling back to defaults when the file is missing
    /// or malformed. Validation warnings are logged, not fatal.
    pub fn load_or_default(path: &Path) -> Self {
        let config: GameConfig = load_json_or_default(path);
        info!("Loaded game config from {}", path.display());
        for warning in config.validate() {
            warn!("config: {}", warning);
        }
        config
    }

    /// Top edge of the ground strip.
    pub fn ground_top(&self) -> f64 {
        self.height - self.ground_height
    }

    /// Vertical center where the bird starts.
    pub fn bird_start_y(&self) -> f64 {
        (self.height / 2.0).floor()
    }

    /// Half-open range the spawner draws gap-top offsets from.
    ///
    /// The width is `height - gap - ground - reserve`, shifted down by the top
    /// margin. A non-positive width collapses to the single value at the margin.
    pub fn gap_top_range(&self) -> Range<u32> {
        let span = (self.height - self.pipe_gap - self.ground_height) as i64
            - self.gap_bottom_reserve as i64;
        let span = span.max(1) as u32;
        self.gap_top_margin..self.gap_top_margin + span
    }

    /// Human-readable problems with this configuration.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.width <= 0.0 || self.height <= 0.0 {
            warnings.push(format!(
                "playfield must have a positive size (got {}x{})",
                self.width, self.height
            ));
        }
        if self.ground_height < 0.0 || self.ground_height >= self.height {
            warnings.push(format!(
                "ground_height {} must lie within the playfield height {}",
                self.ground_height, self.height
            ));
        }
        if self.jump_impulse >= 0.0 {
            warnings.push(format!(
                "jump_impulse {} should be negative (upward)",
                self.jump_impulse
            ));
        }
        if self.gravity <= 0.0 {
            warnings.push(format!("gravity {} should be positive", self.gravity));
        }
        if self.pipe_speed <= 0.0 {
            warnings.push(format!("pipe_speed {} should be positive", self.pipe_speed));
        }
        if self.spawn_interval == 0 {
            warnings.push("spawn_interval must be at least 1 tick".to_string());
        }
        if self.pipe_gap <= self.bird_height {
            warnings.push(format!(
                "pipe_gap {} is not taller than the bird ({})",
                self.pipe_gap, self.bird_height
            ));
        }
        let span = (self.height - self.pipe_gap - self.ground_height) as i64
            - self.gap_bottom_reserve as i64;
        if span <= 0 {
            warnings.push(format!(
                "no room for random gaps: height - gap - ground - reserve = {}",
                span
            ));
        }

        warnings
    }
}
