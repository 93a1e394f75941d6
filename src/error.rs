//! Error types for game construction and play.

use thiserror::Error;

use crate::core::PlayerId;

/// Errors raised while configuring or running a knock-out game.
///
/// The turn loop itself never fails; every variant here is either a
/// rejected configuration or a misuse of the game lifecycle.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("a die needs at least one side, got {0}")]
    InvalidSides(i64),

    #[error("invalid draw range [{low}, {high}]")]
    InvalidDrawRange { low: i64, high: i64 },

    #[error("a game needs at least one player, got {0}")]
    InvalidPlayerCount(usize),

    #[error("invalid knock-out range [{low}, {high}]")]
    InvalidKnockOutRange { low: i64, high: i64 },

    #[error("win threshold must be positive, got {0}")]
    InvalidWinThreshold(i64),

    #[error("{die_sides}-sided dice with win threshold {win_threshold} overflow the score")]
    ScoreOverflow { die_sides: i64, win_threshold: i64 },

    #[error("expected {expected} knock-out numbers, got {got}")]
    KnockOutCountMismatch { expected: usize, got: usize },

    #[error("knock-out number {value} is outside [{low}, {high}]")]
    KnockOutOutOfRange { value: i64, low: i64, high: i64 },

    #[error("game has already been played")]
    AlreadyPlayed,

    #[error("{0} is not in this game")]
    UnknownPlayer(PlayerId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::InvalidSides(0).to_string(),
            "a die needs at least one side, got 0"
        );
        assert_eq!(
            GameError::KnockOutOutOfRange { value: 12, low: 6, high: 9 }.to_string(),
            "knock-out number 12 is outside [6, 9]"
        );
        assert_eq!(
            GameError::UnknownPlayer(PlayerId::new(4)).to_string(),
            "Player 4 is not in this game"
        );
    }
}
