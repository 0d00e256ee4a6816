//! Game lifecycle events for presentation consumers.
//!
//! Events are first-class domain data: serializable, loggable, and
//! independent of any rendering technology. The engine fans them out
//! to subscribers synchronously as part of the mutation that produced
//! them.

use super::rules::WinLine;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Event emitted by the engine on each accepted state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The turn passed to the given player.
    TurnChanged(Mark),
    /// The game was won; the line names the squares to highlight.
    Won {
        /// The winning player.
        winner: Mark,
        /// The completed line.
        line: WinLine,
    },
    /// The board filled with no completed line.
    Draw,
    /// A fresh game was started.
    Reset,
}

/// Subscriber callback invoked for each emitted event.
pub(super) type Subscriber = Box<dyn FnMut(&GameEvent)>;
