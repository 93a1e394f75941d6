//! Turn resolution and game results.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};

/// Dice rolled by each player per turn.
pub const DICE_PER_TURN: usize = 2;

/// What a single turn did to the player who took it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The roll matched the knock-out number.
    KnockedOut,
    /// The roll was added to the score, which is still below the threshold.
    Scored { score: i64 },
    /// The roll took the score to the threshold or beyond.
    ReachedThreshold { score: i64 },
}

impl TurnOutcome {
    /// Whether this turn alone ends the game.
    #[must_use]
    pub fn is_winning(self) -> bool {
        matches!(self, TurnOutcome::ReachedThreshold { .. })
    }
}

/// Apply one turn's roll sum to a player.
///
/// Rolling the knock-out number eliminates the player and leaves the score
/// untouched; any other sum is added to the score.
pub fn resolve_turn(player: &mut Player, roll_sum: i64, win_threshold: i64) -> TurnOutcome {
    if roll_sum == player.knock_out_number() {
        player.eliminate();
        return TurnOutcome::KnockedOut;
    }

    let score = player.add_score(roll_sum);
    if score >= win_threshold {
        TurnOutcome::ReachedThreshold { score }
    } else {
        TurnOutcome::Scored { score }
    }
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A player reached the win threshold.
    Winner(PlayerId),
    /// Every player was knocked out; `last` fell on the final turn.
    AllEliminated { last: PlayerId },
}

impl GameResult {
    /// The winning player, if anyone won.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::AllEliminated { .. } => None,
        }
    }

    /// The player whose turn ended the game.
    #[must_use]
    pub fn decided_by(&self) -> PlayerId {
        match self {
            GameResult::Winner(p) => *p,
            GameResult::AllEliminated { last } => *last,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{} wins", p),
            GameResult::AllEliminated { last } => {
                write!(f, "all players knocked out ({} fell last)", last)
            }
        }
    }
}
