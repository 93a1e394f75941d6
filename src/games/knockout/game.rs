//! Knock-out game implementation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{share, Die, GameConfig, GameRng, Player, PlayerId, RandomSource, SharedSource};
use crate::error::GameError;
use crate::observer::GameObserver;
use crate::rules::{resolve_turn, GameResult, TurnOutcome, DICE_PER_TURN};

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    Running,
    Ended,
}

/// A knock-out dice game.
///
/// The observer is borrowed for `'o`; the game never owns it.
pub struct KnockoutGame<'o> {
    die: Die,
    players: Vec<Player>,
    win_threshold: i64,
    seed: u64,
    observer: Option<&'o mut dyn GameObserver>,
    phase: GamePhase,
    round: u32,
    turns: usize,
    result: Option<GameResult>,
}

/// Post-game report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub seed: u64,
    pub phase: GamePhase,
    pub result: Option<GameResult>,
    pub rounds: u32,
    pub turns: usize,
    pub die_sides: i64,
    pub win_threshold: i64,
    pub standings: Vec<Player>,
}

/// Builder for creating a KnockoutGame.
pub struct KnockoutGameBuilder {
    config: GameConfig,
    source: Option<SharedSource>,
    knock_out_numbers: Option<Vec<i64>>,
}

impl Default for KnockoutGameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            source: None,
            knock_out_numbers: None,
        }
    }
}

impl KnockoutGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn die_sides(mut self, sides: i64) -> Self {
        self.config.die_sides = sides;
        self
    }

    pub fn draw_range(mut self, low: i64, high: i64) -> Self {
        self.config.draw_low = low;
        self.config.draw_high = high;
        self
    }

    pub fn win_threshold(mut self, threshold: i64) -> Self {
        self.config.win_threshold = threshold;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Roll dice from `source` instead of the seeded RNG.
    pub fn random_source(mut self, source: SharedSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Assign knock-out numbers in turn order instead of drawing them.
    pub fn knock_out_numbers(mut self, numbers: Vec<i64>) -> Self {
        self.knock_out_numbers = Some(numbers);
        self
    }

    /// Validate the configuration and build the game.
    pub fn build<'o>(self) -> Result<KnockoutGame<'o>, GameError> {
        let config = self.config;
        config.validate()?;

        let rng = GameRng::new(config.seed);
        let source = self
            .source
            .unwrap_or_else(|| share(rng.for_context("dice")));
        let die = Die::with_draw_range(config.die_sides, config.draw_low, config.draw_high, source)?;

        let (low, high) = (config.knock_out_low, config.knock_out_high);
        let knock_out_numbers = match self.knock_out_numbers {
            Some(numbers) => {
                if numbers.len() != config.player_count {
                    return Err(GameError::KnockOutCountMismatch {
                        expected: config.player_count,
                        got: numbers.len(),
                    });
                }
                if let Some(&value) = numbers.iter().find(|&&n| n < low || n > high) {
                    return Err(GameError::KnockOutOutOfRange { value, low, high });
                }
                numbers
            }
            None => {
                let mut knock_out_rng = rng.for_context("knock_out");
                (0..config.player_count)
                    .map(|_| knock_out_rng.next(low, high))
                    .collect()
            }
        };

        let players = PlayerId::all(config.player_count)
            .zip(knock_out_numbers)
            .map(|(id, knock_out)| Player::new(id, knock_out))
            .collect();

        Ok(KnockoutGame {
            die,
            players,
            win_threshold: config.win_threshold,
            seed: config.seed,
            observer: None,
            phase: GamePhase::NotStarted,
            round: 0,
            turns: 0,
            result: None,
        })
    }
}

impl<'o> KnockoutGame<'o> {
    /// Create a game with default rules and seeded dice.
    pub fn new(player_count: usize, seed: u64) -> Result<Self, GameError> {
        KnockoutGameBuilder::new()
            .player_count(player_count)
            .seed(seed)
            .build()
    }

    /// Attach the observer, replacing any previous one.
    pub fn attach_observer(&mut self, observer: &'o mut dyn GameObserver) {
        self.observer = Some(observer);
    }

    /// Detach the observer, if any.
    pub fn detach_observer(&mut self) -> Option<&'o mut dyn GameObserver> {
        self.observer.take()
    }

    /// Play rounds until the game ends.
    ///
    /// Runs to completion before returning. A game can be played once;
    /// later calls return [`GameError::AlreadyPlayed`] and take no turns.
    pub fn play(&mut self) -> Result<GameResult, GameError> {
        if self.phase != GamePhase::NotStarted {
            return Err(GameError::AlreadyPlayed);
        }

        self.phase = GamePhase::Running;
        info!(
            players = self.players.len(),
            die_sides = self.die.sides(),
            win_threshold = self.win_threshold,
            "knock-out game started"
        );

        // Held outside `self` so it can be handed `&self` during play.
        let mut observer = self.observer.take();
        if let Some(obs) = observer.as_deref_mut() {
            obs.on_start(self);
        }

        let result = loop {
            self.round += 1;
            if let Some(result) = self.play_round(&mut observer) {
                break result;
            }
        };

        self.phase = GamePhase::Ended;
        self.result = Some(result.clone());
        info!(rounds = self.round, turns = self.turns, result = %result, "knock-out game ended");

        if let Some(obs) = observer.as_deref_mut() {
            obs.on_end(self);
        }
        self.observer = observer;

        Ok(result)
    }

    /// Give every active player one turn, stopping as soon as a turn ends the game.
    fn play_round(&mut self, observer: &mut Option<&'o mut dyn GameObserver>) -> Option<GameResult> {
        for index in 0..self.players.len() {
            if self.players[index].is_eliminated() {
                continue;
            }

            let roll_sum: i64 = (0..DICE_PER_TURN).map(|_| self.die.roll()).sum();
            self.turns += 1;

            if let Some(obs) = observer.as_deref_mut() {
                obs.on_turn(self, &self.players[index], roll_sum);
            }

            let player = &mut self.players[index];
            let id = player.id();
            let outcome = resolve_turn(player, roll_sum, self.win_threshold);
            debug!(round = self.round, player = %id, roll_sum, ?outcome, "turn resolved");

            match outcome {
                TurnOutcome::ReachedThreshold { .. } => return Some(GameResult::Winner(id)),
                TurnOutcome::KnockedOut if self.all_eliminated() => {
                    return Some(GameResult::AllEliminated { last: id });
                }
                _ => {}
            }
        }
        None
    }

    /// Players in turn order, eliminated ones included.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by id.
    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players
            .iter()
            .find(|p| p.id() == id)
            .ok_or(GameError::UnknownPlayer(id))
    }

    /// Players not yet eliminated.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    #[must_use]
    pub fn all_eliminated(&self) -> bool {
        self.players.iter().all(Player::is_eliminated)
    }

    /// Highest-scoring active player; earlier players win ties.
    #[must_use]
    pub fn leader(&self) -> Option<&Player> {
        self.active_players()
            .max_by(|a, b| a.score().cmp(&b.score()).then(b.id().cmp(&a.id())))
    }

    /// The shared die.
    #[must_use]
    pub fn die(&self) -> &Die {
        &self.die
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current round, starting at 1 once play begins.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Turns taken so far.
    #[must_use]
    pub fn turns(&self) -> usize {
        self.turns
    }

    #[must_use]
    pub fn win_threshold(&self) -> i64 {
        self.win_threshold
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Snapshot of the game for reporting.
    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            seed: self.seed,
            phase: self.phase,
            result: self.result.clone(),
            rounds: self.round,
            turns: self.turns,
            die_sides: self.die.sides(),
            win_threshold: self.win_threshold,
            standings: self.players.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedSource;

    fn scripted(values: &[i64]) -> SharedSource {
        share(ScriptedSource::new(values.to_vec()))
    }

    #[test]
    fn test_game_creation() {
        let game = KnockoutGame::new(4, 42).unwrap();

        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert_eq!(game.players().len(), 4);
        assert_eq!(game.die().sides(), 6);
        assert_eq!(game.win_threshold(), 100);

        let ids: Vec<_> = game.players().iter().map(Player::id).collect();
        assert_eq!(ids, PlayerId::all(4).collect::<Vec<_>>());
        for player in game.players() {
            assert!((6..=9).contains(&player.knock_out_number()));
            assert_eq!(player.score(), 0);
            assert!(player.is_active());
        }
    }

    #[test]
    fn test_invalid_configuration() {
        assert_eq!(
            KnockoutGame::new(0, 1).err(),
            Some(GameError::InvalidPlayerCount(0))
        );
        assert_eq!(
            KnockoutGameBuilder::new().die_sides(0).build().err(),
            Some(GameError::InvalidSides(0))
        );

        let wide_knock_out = GameConfig::default().with_knock_out_range(2, 3);
        assert_eq!(
            KnockoutGameBuilder::new().config(wide_knock_out).build().err(),
            Some(GameError::InvalidKnockOutRange { low: 2, high: 3 })
        );
    }

    #[test]
    fn test_huge_die_is_rejected_before_play() {
        let result = KnockoutGameBuilder::new()
            .die_sides(i64::MAX)
            .draw_range(i64::MAX - 1, i64::MAX - 1)
            .build();
        assert_eq!(
            result.err(),
            Some(GameError::ScoreOverflow { die_sides: i64::MAX, win_threshold: 100 })
        );
    }

    #[test]
    fn test_knock_out_number_validation() {
        let mismatch = KnockoutGameBuilder::new()
            .player_count(3)
            .knock_out_numbers(vec![6, 7])
            .build();
        assert_eq!(
            mismatch.err(),
            Some(GameError::KnockOutCountMismatch { expected: 3, got: 2 })
        );

        let out_of_range = KnockoutGameBuilder::new()
            .player_count(2)
            .knock_out_numbers(vec![6, 10])
            .build();
        assert_eq!(
            out_of_range.err(),
            Some(GameError::KnockOutOutOfRange { value: 10, low: 6, high: 9 })
        );
    }

    #[test]
    fn test_knock_out_numbers_are_seeded() {
        let a = KnockoutGame::new(6, 17).unwrap();
        let b = KnockoutGame::new(6, 17).unwrap();
        assert_eq!(a.players(), b.players());
    }

    #[test]
    fn test_play_reaches_ended() {
        let mut game = KnockoutGame::new(3, 42).unwrap();
        let result = game.play().unwrap();

        assert_eq!(game.phase(), GamePhase::Ended);
        assert_eq!(game.result(), Some(&result));
        assert!(game.turns() > 0);
        assert!(game.round() >= 1);
    }

    #[test]
    fn test_play_twice_is_rejected() {
        let mut game = KnockoutGame::new(2, 5).unwrap();
        game.play().unwrap();
        let turns = game.turns();

        assert_eq!(game.play(), Err(GameError::AlreadyPlayed));
        assert_eq!(game.turns(), turns);
    }

    #[test]
    fn test_eliminated_player_is_skipped() {
        // Every die shows 3, so every roll sums to 6: player 1 is knocked
        // out on the first turn and player 2 scores 6 per turn alone.
        let mut game = KnockoutGameBuilder::new()
            .player_count(2)
            .knock_out_numbers(vec![6, 7])
            .random_source(scripted(&[2]))
            .build()
            .unwrap();

        let result = game.play().unwrap();

        assert_eq!(result, GameResult::Winner(PlayerId::new(2)));
        assert!(game.player(PlayerId::new(1)).unwrap().is_eliminated());
        assert_eq!(game.player(PlayerId::new(1)).unwrap().score(), 0);
        assert_eq!(game.player(PlayerId::new(2)).unwrap().score(), 102);
        assert_eq!(game.turns(), 18);
        assert_eq!(game.round(), 17);
    }

    #[test]
    fn test_leader_prefers_earlier_player_on_tie() {
        let mut game = KnockoutGameBuilder::new()
            .player_count(3)
            .knock_out_numbers(vec![6, 6, 6])
            .random_source(scripted(&[4]))
            .build()
            .unwrap();

        assert_eq!(game.leader().unwrap().id(), PlayerId::new(1));

        game.play().unwrap();

        assert_eq!(game.result(), Some(&GameResult::Winner(PlayerId::new(1))));
        let leader = game.leader().unwrap();
        assert_eq!(leader.id(), PlayerId::new(1));
        assert_eq!(leader.score(), 100);
        assert_eq!(game.player(PlayerId::new(3)).unwrap().score(), 90);
    }

    #[test]
    fn test_unknown_player() {
        let game = KnockoutGame::new(2, 1).unwrap();
        assert_eq!(
            game.player(PlayerId::new(3)).err(),
            Some(GameError::UnknownPlayer(PlayerId::new(3)))
        );
    }

    #[test]
    fn test_summary_serialization() {
        let mut game = KnockoutGame::new(2, 9).unwrap();
        game.play().unwrap();

        let summary = game.summary();
        assert_eq!(summary.standings.len(), 2);
        assert_eq!(summary.phase, GamePhase::Ended);

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: GameSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
