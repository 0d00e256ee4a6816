//! Cumulative score persistence.

use super::models::{Outcome, ScoreTally};
use crate::storage::Storage;
use tracing::{debug, info, instrument, warn};

/// Fixed key the tally is persisted under.
pub const SCORES_KEY: &str = "ttt_scores";

/// Owns the cumulative tally and its persistence.
///
/// The tally is loaded once at construction and persisted immediately
/// after every [`record`](Self::record). Storage failures stop here:
/// reads fall back to zeros, failed writes are logged and dropped, and
/// the in-memory tally stays authoritative for the session.
pub struct ScoreStore {
    tally: ScoreTally,
    storage: Box<dyn Storage>,
}

impl ScoreStore {
    /// Loads the persisted tally from the given backend.
    ///
    /// Absence, malformed content, and read failures all yield a zero
    /// tally; this constructor never errors.
    #[instrument(skip(storage))]
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let tally = match storage.read(SCORES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(tally) => tally,
                Err(e) => {
                    warn!(error = %e, "Malformed tally, starting from zeros");
                    ScoreTally::default()
                }
            },
            Ok(None) => {
                debug!("No persisted tally");
                ScoreTally::default()
            }
            Err(e) => {
                warn!(error = %e, "Tally read failed, starting from zeros");
                ScoreTally::default()
            }
        };
        info!(?tally, "Score store loaded");
        Self { tally, storage }
    }

    /// Records one completed game and persists the updated tally.
    ///
    /// Exactly one counter moves, by exactly 1, per call.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        self.tally.increment(outcome);
        info!(?outcome, tally = ?self.tally, "Game recorded");
        self.persist();
    }

    /// Current tally. Pure read; never touches storage.
    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.tally) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Tally serialization failed");
                return;
            }
        };
        if let Err(e) = self.storage.write(SCORES_KEY, &json) {
            warn!(error = %e, "Tally write failed, keeping in-memory tally");
        }
    }
}

// The boxed backend has no useful Debug output.
impl std::fmt::Debug for ScoreStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreStore")
            .field("tally", &self.tally)
            .finish()
    }
}
