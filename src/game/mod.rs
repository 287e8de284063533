//! Match state machine.
//!
//! - `moves`: immutable `Move` records
//! - `seating`: who sits where and who may move
//! - `state`: `Match`, its status and transitions

pub mod moves;
pub mod seating;
pub mod state;

pub use moves::Move;
pub use seating::Seating;
pub use state::{BatchReport, GameResult, Match, MatchStatus, MoveReport, UnknownStatus};
