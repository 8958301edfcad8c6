//! Flappy - terminal Flappy Bird behind a local login screen.
//!
//! This module exposes the game logic for testing and external use.

pub mod accounts;
pub mod config;
pub mod constants;
pub mod game;
pub mod high_score;
pub mod input;
pub mod session;
pub mod ui;
pub mod utils;
