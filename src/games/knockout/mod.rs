//! Knock-out dice game.
//!
//! - Every player gets a secret knock-out number between 6 and 9
//! - On your turn: roll two dice and add them up
//! - Roll your knock-out number and you are out
//! - Otherwise the sum is added to your score
//! - First player to 100 wins; if everyone is knocked out, nobody does
//!
//! The game ends the moment a turn decides it; later players in that
//! round do not roll.

mod game;

pub use game::{GamePhase, GameSummary, KnockoutGame, KnockoutGameBuilder};
