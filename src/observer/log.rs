//! Event-recording observer.

use serde::{Deserialize, Serialize};

use super::GameObserver;
use crate::core::{Player, PlayerId};
use crate::games::knockout::KnockoutGame;
use crate::rules::GameResult;

/// A recorded lifecycle notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started {
        players: usize,
        die_sides: i64,
    },
    Turn {
        round: u32,
        player: PlayerId,
        /// Player's score before this roll is applied.
        score: i64,
        roll_sum: i64,
    },
    Ended {
        result: Option<GameResult>,
        rounds: u32,
        turns: usize,
    },
}

/// Records every notification in order.
///
/// Two games built from the same seed produce identical logs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Turn events only, as `(player, roll_sum)` pairs.
    pub fn turns(&self) -> impl Iterator<Item = (PlayerId, i64)> + '_ {
        self.events.iter().filter_map(|event| match event {
            GameEvent::Turn { player, roll_sum, .. } => Some((*player, *roll_sum)),
            _ => None,
        })
    }
}

impl GameObserver for EventLog {
    fn on_start(&mut self, game: &KnockoutGame<'_>) {
        self.events.push(GameEvent::Started {
            players: game.players().len(),
            die_sides: game.die().sides(),
        });
    }

    fn on_turn(&mut self, game: &KnockoutGame<'_>, player: &Player, roll_sum: i64) {
        self.events.push(GameEvent::Turn {
            round: game.round(),
            player: player.id(),
            score: player.score(),
            roll_sum,
        });
    }

    fn on_end(&mut self, game: &KnockoutGame<'_>) {
        self.events.push(GameEvent::Ended {
            result: game.result().cloned(),
            rounds: game.round(),
            turns: game.turns(),
        });
    }
}
