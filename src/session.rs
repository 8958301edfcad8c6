//! A play session: the game, its random stream, and the high-score store.
//!
//! The frame loop calls [`GameSession::tick`] once per frame and forwards the
//! primary action to [`GameSession::primary_action`]. The random stream is
//! created once and survives resets.

use crate::config::GameConfig;
use crate::game::{process_input, process_tick, FlappyGame, InputOutcome, Phase, TickOutcome};
use crate::high_score::HighScoreStore;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct GameSession<S: HighScoreStore> {
    game: FlappyGame,
    rng: StdRng,
    store: S,
    username: Option<String>,
}

impl<S: HighScoreStore> GameSession<S> {
    /// Start on the Idle screen with the stored high score. `seed` makes pipe
    /// gaps reproducible; `None` seeds from the OS.
    pub fn new(config: GameConfig, store: S, seed: Option<u64>, username: Option<String>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let high_score = store.load();
        info!("Session ready, high score {}", high_score);
        Self {
            game: FlappyGame::new(config, high_score),
            rng,
            store,
            username: username.filter(|name| !name.is_empty()),
        }
    }

    pub fn game(&self) -> &FlappyGame {
        &self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.game.phase
    }

    /// Whether the frame loop should be ticking.
    pub fn is_running(&self) -> bool {
        self.game.phase == Phase::Running
    }

    pub fn primary_action(&mut self) -> InputOutcome {
        process_input(&mut self.game)
    }

    /// Advance one frame. A run that ends with a new best persists it.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = process_tick(&mut self.game, &mut self.rng);
        if let TickOutcome::GameOver {
            score,
            new_high_score,
        } = outcome
        {
            if new_high_score {
                info!("New high score: {}", score);
                self.store.save(score);
            } else {
                info!("Run over with score {}", score);
            }
        }
        outcome
    }
}
