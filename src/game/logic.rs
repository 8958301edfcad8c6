//! Game logic: the primary-action state machine and the per-frame tick.

use super::collision::{check_collision, remove_offscreen, score_passed_pipes};
use super::types::{FlappyGame, Phase};
use log::debug;
use rand::Rng;

/// What the primary action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Idle → Running.
    Started,
    /// Bird jumped while running.
    Jumped,
    /// Over → Idle with a fresh bird and no pipes.
    Reset,
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing simulated.
    Skipped,
    /// One step simulated, no collision.
    Advanced,
    /// The bird collided and the run is over.
    GameOver {
        score: u32,
        /// The run beat the previous high score, which has been raised.
        new_high_score: bool,
    },
}

/// Process the single player input ("primary action").
pub fn process_input(game: &mut FlappyGame) -> InputOutcome {
    match game.phase {
        Phase::Idle => {
            game.phase = Phase::Running;
            debug!("Run started");
            InputOutcome::Started
        }
        Phase::Running => {
            game.bird.jump(game.config.jump_impulse);
            InputOutcome::Jumped
        }
        Phase::Over => {
            game.reset();
            debug!("Back to start screen");
            InputOutcome::Reset
        }
    }
}

/// Process one frame. Entities move, the spawner may add a pipe, passed
/// pipes are scored, off-screen pipes removed, then collisions are checked.
pub fn process_tick<R: Rng>(game: &mut FlappyGame, rng: &mut R) -> TickOutcome {
    if game.phase != Phase::Running {
        return TickOutcome::Skipped;
    }

    update_entities(game, rng);

    if !check_collision(&game.bird, &game.pipes, &game.config) {
        return TickOutcome::Advanced;
    }

    game.phase = Phase::Over;
    let new_high_score = game.score > game.high_score;
    if new_high_score {
        game.high_score = game.score;
    }
    debug!(
        "Collision after {} ticks, score {}",
        game.tick_count, game.score
    );
    TickOutcome::GameOver {
        score: game.score,
        new_high_score,
    }
}

fn update_entities<R: Rng>(game: &mut FlappyGame, rng: &mut R) {
    game.tick_count += 1;
    game.bird.update(game.config.gravity);

    if let Some(pipe) = game.spawner.tick(rng, &game.config) {
        game.pipes.push(pipe);
    }

    for pipe in &mut game.pipes {
        pipe.update(game.config.pipe_speed);
    }
    // Score before removal so a pipe can't leave unscored
    game.score += score_passed_pipes(&mut game.pipes, game.bird.x());
    remove_offscreen(&mut game.pipes);
}
