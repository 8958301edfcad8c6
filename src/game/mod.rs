//! Flappy Bird simulation core.
//!
//! The player keeps a bird airborne against constant gravity by jumping
//! through the gaps of pipes that scroll in from the right. Touching a pipe,
//! the ground, or the ceiling ends the run.

pub mod collision;
pub mod logic;
pub mod spawner;
pub mod types;

pub use logic::*;
pub use spawner::Spawner;
pub use types::*;
