//! Turn-counting observer.

use tracing::info;

use super::GameObserver;
use crate::core::{Player, PlayerId, PlayerMap};
use crate::games::knockout::KnockoutGame;

/// Counts turns and records the die used.
///
/// Reports the die's side count when the game starts and the number of
/// turns taken when it ends.
#[derive(Clone, Debug, Default)]
pub struct TurnTracker {
    die_sides: Option<i64>,
    turns: usize,
    turns_per_player: Option<PlayerMap<usize>>,
    starts: usize,
    ends: usize,
    final_turns: Option<usize>,
}

impl TurnTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Side count of the die, recorded at start.
    #[must_use]
    pub fn die_sides(&self) -> Option<i64> {
        self.die_sides
    }

    /// Turns observed so far.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Turns observed for one player.
    #[must_use]
    pub fn turns_for(&self, player: PlayerId) -> usize {
        self.turns_per_player
            .as_ref()
            .and_then(|map| map.get(player))
            .copied()
            .unwrap_or(0)
    }

    /// Number of times `on_start` fired.
    #[must_use]
    pub fn starts(&self) -> usize {
        self.starts
    }

    /// Number of times `on_end` fired.
    #[must_use]
    pub fn ends(&self) -> usize {
        self.ends
    }

    /// Turn count recorded at the end of the game.
    #[must_use]
    pub fn final_turns(&self) -> Option<usize> {
        self.final_turns
    }
}

impl GameObserver for TurnTracker {
    fn on_start(&mut self, game: &KnockoutGame<'_>) {
        self.starts += 1;
        self.die_sides = Some(game.die().sides());
        self.turns_per_player = Some(PlayerMap::with_default(game.players().len()));
        info!(die_sides = game.die().sides(), "started a new game");
    }

    fn on_turn(&mut self, _game: &KnockoutGame<'_>, player: &Player, roll_sum: i64) {
        self.turns += 1;
        if let Some(count) = self
            .turns_per_player
            .as_mut()
            .and_then(|map| map.get_mut(player.id()))
        {
            *count += 1;
        }
        info!(player = %player.id(), roll_sum, "rolled");
    }

    fn on_end(&mut self, _game: &KnockoutGame<'_>) {
        self.ends += 1;
        self.final_turns = Some(self.turns);
        info!(turns = self.turns, "game over");
    }
}
