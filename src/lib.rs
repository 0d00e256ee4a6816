//! Tic-tac-toe game engine with persistent score tracking.
//!
//! # Architecture
//!
//! - **Game**: turn sequencer, win/draw detection, lifecycle events
//! - **Score**: cumulative win/draw tallies with fail-soft persistence
//! - **Storage**: durable key/value backends (file-backed or in-memory)
//! - **Session**: wires terminal game transitions to the scoreboard
//!
//! The engine is synchronous and single-actor: one move runs to
//! completion, including event fan-out, before the next is accepted.
//! Presentation layers subscribe to [`GameEvent`]s and read
//! [`ScoreStore::tally`] to render a scoreboard; nothing here depends on
//! a rendering technology.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, MemoryStore, ScoreStore};
//!
//! let store = ScoreStore::load(Box::new(MemoryStore::new()));
//! let mut session = GameSession::new(store);
//!
//! session.play(4);
//! assert_eq!(session.engine().status_line(), "O's turn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod score;
mod session;
mod storage;
mod theme;

// Crate-level exports - Game engine
pub use game::{
    Board, GameEngine, GameEvent, GameState, Mark, Phase, Square, WIN_LINES, WinLine,
    winning_line,
};

// Crate-level exports - Score persistence
pub use score::{Outcome, SCORES_KEY, ScoreStore, ScoreTally};

// Crate-level exports - Session wiring
pub use session::GameSession;

// Crate-level exports - Storage backends
pub use storage::{FileStore, MemoryStore, Storage, StorageError};

// Crate-level exports - Theme preference
pub use theme::{THEME_KEY, ThemePreference};
