//! Persistent win/draw tallies.

mod models;
mod store;

pub use models::{Outcome, ScoreTally};
pub use store::{SCORES_KEY, ScoreStore};
