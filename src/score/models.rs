//! Tally model and outcome classification.

use crate::game::{GameEvent, Mark, Phase};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Cumulative win/draw counts across games.
///
/// Serialized as `{"X":n,"O":n,"D":n}`; missing fields read as zero so
/// partially-written values still load.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Getters, new, Serialize, Deserialize,
)]
pub struct ScoreTally {
    /// Games won by X.
    #[serde(rename = "X", default)]
    wins_x: u64,
    /// Games won by O.
    #[serde(rename = "O", default)]
    wins_o: u64,
    /// Drawn games.
    #[serde(rename = "D", default)]
    draws: u64,
}

impl ScoreTally {
    pub(crate) fn increment(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::WinX => self.wins_x += 1,
            Outcome::WinO => self.wins_o += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Outcome of one completed game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Outcome {
    /// X completed a line.
    WinX,
    /// O completed a line.
    WinO,
    /// The board filled with no line.
    Draw,
}

impl Outcome {
    /// Classifies a terminal event; `None` for non-terminal events.
    pub fn from_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Won { winner, .. } => Some(Self::from_winner(*winner)),
            GameEvent::Draw => Some(Self::Draw),
            GameEvent::TurnChanged(_) | GameEvent::Reset => None,
        }
    }

    /// Classifies a terminal phase; `None` while the game is in progress.
    pub fn from_phase(phase: Phase) -> Option<Self> {
        match phase {
            Phase::Won { winner, .. } => Some(Self::from_winner(winner)),
            Phase::Draw => Some(Self::Draw),
            Phase::InProgress => None,
        }
    }

    fn from_winner(winner: Mark) -> Self {
        match winner {
            Mark::X => Self::WinX,
            Mark::O => Self::WinO,
        }
    }
}
