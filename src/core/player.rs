//! Players, player identifiers, and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ids are 1-based and follow turn order:
//! the first player to move is `PlayerId(1)`.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//!
//! ## Player
//!
//! Plain record of a player's identity, knock-out number, score and
//! elimination flag. Only the game's turn resolution mutates it.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier. The first player is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the 0-based roster position of this player.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use knockout_dice::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u32).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in a knock-out game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    knock_out_number: i64,
    score: i64,
    eliminated: bool,
}

impl Player {
    /// Create a player with a zero score.
    #[must_use]
    pub fn new(id: PlayerId, knock_out_number: i64) -> Self {
        Self {
            id,
            knock_out_number,
            score: 0,
            eliminated: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The roll sum that eliminates this player.
    #[must_use]
    pub fn knock_out_number(&self) -> i64 {
        self.knock_out_number
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// Still taking turns.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.eliminated
    }

    pub(crate) fn add_score(&mut self, points: i64) -> i64 {
        debug_assert!(points >= 0, "scores never decrease");
        debug_assert!(!self.eliminated, "eliminated players do not score");
        self.score += points;
        self.score
    }

    pub(crate) fn eliminate(&mut self) {
        self.eliminated = true;
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use knockout_dice::core::{PlayerId, PlayerMap};
///
/// let mut turns: PlayerMap<u32> = PlayerMap::with_default(3);
/// turns[PlayerId::new(2)] += 1;
/// assert_eq!(turns[PlayerId::new(2)], 1);
/// assert_eq!(turns[PlayerId::new(1)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, if the player exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        if player.0 == 0 {
            return None;
        }
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data, if the player exists.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        if player.0 == 0 {
            return None;
        }
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u32 + 1), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
            .unwrap_or_else(|| panic!("{} is not in this map", player))
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
            .unwrap_or_else(|| panic!("{} is not in this map", player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        let p2 = PlayerId::new(2);

        assert_eq!(p1.index(), 0);
        assert_eq!(p2.index(), 1);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_starts_clean() {
        let player = Player::new(PlayerId::new(1), 7);

        assert_eq!(player.knock_out_number(), 7);
        assert_eq!(player.score(), 0);
        assert!(player.is_active());
    }

    #[test]
    fn test_player_scoring_and_elimination() {
        let mut player = Player::new(PlayerId::new(2), 8);

        assert_eq!(player.add_score(10), 10);
        assert_eq!(player.add_score(5), 15);

        player.eliminate();
        assert!(player.is_eliminated());
        assert_eq!(player.score(), 15);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<u32> = PlayerMap::new(3, |p| p.0 * 10);

        assert_eq!(map[PlayerId::new(1)], 10);
        assert_eq!(map[PlayerId::new(2)], 20);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 3);
    }

    #[test]
    fn test_player_map_out_of_range() {
        let map: PlayerMap<u32> = PlayerMap::with_default(2);

        assert!(map.get(PlayerId::new(0)).is_none());
        assert!(map.get(PlayerId::new(3)).is_none());
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<u32> = PlayerMap::new(2, |p| p.0);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(1), &1), (PlayerId::new(2), &2)]);
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(1), 6);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<u32> = PlayerMap::with_default(0);
    }
}
