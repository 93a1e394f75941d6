//! Rules of a knock-out turn.
//!
//! Turn resolution is a pure function of the player and the roll sum, so
//! the game loop only decides *when* the game ends, never *how* a roll
//! is scored.

pub mod turn;

pub use turn::{resolve_turn, GameResult, TurnOutcome, DICE_PER_TURN};
