//! Game configuration.

use serde::{Deserialize, Serialize};

use super::die::DEFAULT_DRAW_RANGE;
use crate::error::GameError;
use crate::rules::DICE_PER_TURN;

/// Score at or above which a player wins.
pub const WIN_THRESHOLD: i64 = 100;

/// Inclusive range knock-out numbers are drawn from.
pub const KNOCK_OUT_RANGE: (i64, i64) = (6, 9);

/// Configuration for a knock-out game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players (at least 1).
    pub player_count: usize,

    /// Sides on the shared die.
    pub die_sides: i64,

    /// Lowest raw value drawn per roll.
    pub draw_low: i64,

    /// Highest raw value drawn per roll.
    pub draw_high: i64,

    /// Lowest possible knock-out number.
    pub knock_out_low: i64,

    /// Highest possible knock-out number.
    pub knock_out_high: i64,

    /// Score that ends the game.
    pub win_threshold: i64,

    /// Seed for dice and knock-out numbers.
    /// Same seed produces the same game.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            die_sides: 6,
            draw_low: DEFAULT_DRAW_RANGE.0,
            draw_high: DEFAULT_DRAW_RANGE.1,
            knock_out_low: KNOCK_OUT_RANGE.0,
            knock_out_high: KNOCK_OUT_RANGE.1,
            win_threshold: WIN_THRESHOLD,
            seed: 42,
        }
    }
}

impl GameConfig {
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn with_die_sides(mut self, sides: i64) -> Self {
        self.die_sides = sides;
        self
    }

    pub fn with_draw_range(mut self, low: i64, high: i64) -> Self {
        self.draw_low = low;
        self.draw_high = high;
        self
    }

    pub fn with_knock_out_range(mut self, low: i64, high: i64) -> Self {
        self.knock_out_low = low;
        self.knock_out_high = high;
        self
    }

    pub fn with_win_threshold(mut self, threshold: i64) -> Self {
        self.win_threshold = threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.player_count == 0 {
            return Err(GameError::InvalidPlayerCount(self.player_count));
        }
        if self.die_sides <= 0 {
            return Err(GameError::InvalidSides(self.die_sides));
        }
        if self.draw_low > self.draw_high {
            return Err(GameError::InvalidDrawRange {
                low: self.draw_low,
                high: self.draw_high,
            });
        }
        // Narrower ranges are fine; anything outside 6-9 is not.
        if self.knock_out_low > self.knock_out_high
            || self.knock_out_low < KNOCK_OUT_RANGE.0
            || self.knock_out_high > KNOCK_OUT_RANGE.1
        {
            return Err(GameError::InvalidKnockOutRange {
                low: self.knock_out_low,
                high: self.knock_out_high,
            });
        }
        if self.win_threshold <= 0 {
            return Err(GameError::InvalidWinThreshold(self.win_threshold));
        }
        // A score below the threshold plus one maximal turn must fit in i64.
        let max_score = self
            .die_sides
            .checked_mul(DICE_PER_TURN as i64)
            .and_then(|max_roll| max_roll.checked_add(self.win_threshold));
        if max_score.is_none() {
            return Err(GameError::ScoreOverflow {
                die_sides: self.die_sides,
                win_threshold: self.win_threshold,
            });
        }
        Ok(())
    }
}
