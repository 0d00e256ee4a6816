//! Game engine: board, turn order, win/draw detection, events.

mod engine;
mod events;
mod rules;
mod types;

pub use engine::{GameEngine, GameState, Phase};
pub use events::GameEvent;
pub use rules::{WIN_LINES, WinLine, winning_line};
pub use types::{Board, Mark, Square};
