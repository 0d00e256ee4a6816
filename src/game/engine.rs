//! Turn sequencing and phase transitions.

use super::events::{GameEvent, Subscriber};
use super::rules::{self, WinLine};
use super::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Lifecycle stage of a game.
///
/// Transitions only `InProgress -> Won` or `InProgress -> Draw`;
/// [`GameEngine::reset`] replaces the state rather than reversing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won {
        /// The winning player.
        winner: Mark,
        /// The completed line.
        line: WinLine,
    },
    /// Game ended with a full board and no winner.
    Draw,
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    phase: Phase,
}

impl GameState {
    fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            phase: Phase::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move. Meaningful only while in progress.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tic-tac-toe game engine.
///
/// Owns the [`GameState`] and notifies subscribers of every accepted
/// transition. Invalid moves (occupied square, out-of-bounds index,
/// finished game) are silent no-ops: the UI layer is expected to prevent
/// them, and the engine rejects them without surfacing an error.
pub struct GameEngine {
    state: GameState,
    subscribers: Vec<Subscriber>,
}

impl GameEngine {
    /// Creates an engine with a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            subscribers: Vec::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Mark {
        self.state.current_player
    }

    /// Returns the game phase.
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Registers a subscriber for lifecycle events.
    ///
    /// Subscribers run synchronously, in registration order, during the
    /// call that produced the event.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Applies the current player's mark at the given position (0-8).
    ///
    /// Ignores the move entirely when the game is over, the index is out
    /// of bounds, or the square is occupied: no state change, no event.
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn apply_move(&mut self, index: usize) {
        if self.state.phase != Phase::InProgress {
            debug!(index, "Move ignored, game already over");
            return;
        }
        if !self.state.board.is_empty(index) {
            debug!(index, "Move ignored, square unavailable");
            return;
        }

        let player = self.state.current_player;
        if self.state.board.set(index, Square::Occupied(player)).is_err() {
            // Unreachable: is_empty already bounds-checked the index.
            return;
        }

        // Win detection strictly precedes the draw check, so a move that
        // both completes a line and fills the board scores as a win.
        if let Some((winner, line)) = rules::winning_line(&self.state.board) {
            self.state.phase = Phase::Won { winner, line };
            info!(%winner, ?line, "Game won");
            self.notify(GameEvent::Won { winner, line });
        } else if self.state.board.is_full() {
            self.state.phase = Phase::Draw;
            info!("Game drawn");
            self.notify(GameEvent::Draw);
        } else {
            self.state.current_player = player.opponent();
            debug!(next = %self.state.current_player, "Turn changed");
            self.notify(GameEvent::TurnChanged(self.state.current_player));
        }
    }

    /// Discards the current game and starts a fresh one.
    ///
    /// Scores live elsewhere and are untouched.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.state = GameState::new();
        self.notify(GameEvent::Reset);
    }

    /// Returns the first completed line in canonical order, if any.
    ///
    /// Pure query over the current board; the enumeration order is fixed
    /// so the same board always reports the same line.
    pub fn winning_line(&self) -> Option<WinLine> {
        rules::winning_line(&self.state.board).map(|(_, line)| line)
    }

    /// Human-readable status, e.g. `"X's turn"`, `"O wins!"`, `"Draw!"`.
    pub fn status_line(&self) -> String {
        match self.state.phase {
            Phase::InProgress => format!("{}'s turn", self.state.current_player),
            Phase::Won { winner, .. } => format!("{winner} wins!"),
            Phase::Draw => "Draw!".to_string(),
        }
    }

    fn notify(&mut self, event: GameEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

// Subscriber closures carry no useful Debug output.
impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
