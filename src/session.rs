//! Binds a game engine to the score store.

use crate::game::{GameEngine, Phase};
use crate::score::{Outcome, ScoreStore};
use tracing::{info, instrument};

/// One interactive session: a game engine plus the persistent scoreboard.
///
/// Routes each terminal transition to [`ScoreStore::record`] exactly
/// once. The guarantee falls out of the phase machine: [`play`](Self::play)
/// records only on the transition *out of* `InProgress`, and a finished
/// game ignores further moves, so no game can be tallied twice.
#[derive(Debug)]
pub struct GameSession {
    engine: GameEngine,
    scores: ScoreStore,
}

impl GameSession {
    /// Creates a session around an already-loaded score store.
    #[instrument(skip(scores))]
    pub fn new(scores: ScoreStore) -> Self {
        info!(tally = ?scores.tally(), "Creating game session");
        Self {
            engine: GameEngine::new(),
            scores,
        }
    }

    /// Applies a move, recording the outcome if this move ended the game.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) {
        let was_in_progress = self.engine.phase() == Phase::InProgress;
        self.engine.apply_move(index);

        if !was_in_progress {
            return;
        }
        if let Some(outcome) = Outcome::from_phase(self.engine.phase()) {
            info!(?outcome, "Game finished");
            self.scores.record(outcome);
        }
    }

    /// Starts a fresh game. The tally is untouched.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// The engine, for presentation wiring (subscriptions and queries).
    pub fn engine(&mut self) -> &mut GameEngine {
        &mut self.engine
    }

    /// The score store, for scoreboard rendering.
    pub fn scores(&self) -> &ScoreStore {
        &self.scores
    }
}
