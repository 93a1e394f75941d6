//! Game lifecycle observers.
//!
//! A game notifies at most one observer at three points: when play starts,
//! at the start of every turn (after the dice are rolled, before the roll
//! is applied), and when the game ends. Notifications return nothing and
//! receive shared references only, so an observer cannot change the game.

pub mod tracker;
pub mod log;

pub use log::{EventLog, GameEvent};
pub use tracker::TurnTracker;

use crate::core::Player;
use crate::games::knockout::KnockoutGame;

/// Receives game lifecycle notifications.
///
/// All methods default to doing nothing.
pub trait GameObserver {
    /// Play has started; no turn has been taken yet.
    fn on_start(&mut self, _game: &KnockoutGame<'_>) {}

    /// `player` rolled `roll_sum` and is about to have it applied.
    fn on_turn(&mut self, _game: &KnockoutGame<'_>, _player: &Player, _roll_sum: i64) {}

    /// The game has ended and its result is available.
    fn on_end(&mut self, _game: &KnockoutGame<'_>) {}
}
