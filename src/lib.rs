//! # knockout-dice
//!
//! A turn-based "knock-out" dice game engine.
//!
//! ## Rules
//!
//! Each player holds a fixed knock-out number between 6 and 9. Players take
//! turns rolling two dice. Rolling your knock-out number eliminates you;
//! anything else is added to your score. The game ends as soon as one
//! player reaches 100 points or every player has been knocked out.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: Dice draw from a [`RandomSource`] handed in
//!    at construction. Seeded games are reproducible; scripted sources
//!    drive exact scenarios in tests.
//!
//! 2. **Optional observer**: A game notifies at most one borrowed
//!    [`GameObserver`] at start, on every turn, and at the end. Observers
//!    cannot change the game.
//!
//! 3. **Immediate termination**: The end condition is checked after every
//!    turn, not after every round.
//!
//! ## Modules
//!
//! - `core`: Random sources, dice, players, configuration
//! - `rules`: Turn resolution and game results
//! - `observer`: Observer trait and reference observers
//! - `games`: The knock-out game state machine
//!
//! ```
//! use knockout_dice::{KnockoutGame, TurnTracker};
//!
//! let mut tracker = TurnTracker::new();
//! let mut game = KnockoutGame::new(3, 42).unwrap();
//! game.attach_observer(&mut tracker);
//! let result = game.play().unwrap();
//!
//! drop(game);
//! assert_eq!(tracker.ends(), 1);
//! println!("{result} after {} turns", tracker.turns());
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod observer;
pub mod games;

pub use crate::core::{
    share, Die, GameConfig, GameRng, Player, PlayerId, PlayerMap, RandomSource,
    ScriptedSource, SharedSource, DEFAULT_DRAW_RANGE, KNOCK_OUT_RANGE, WIN_THRESHOLD,
};

pub use crate::error::GameError;

pub use crate::rules::{resolve_turn, GameResult, TurnOutcome, DICE_PER_TURN};

pub use crate::observer::{EventLog, GameEvent, GameObserver, TurnTracker};

pub use crate::games::knockout::{GamePhase, GameSummary, KnockoutGame, KnockoutGameBuilder};
