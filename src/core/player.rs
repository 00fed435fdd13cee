//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! A round is always played between two seats: the human `Player` and the
//! automated `Opponent`. Turn order alternates between them.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a fixed two-element array.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// One of the two seats in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerId {
    /// The human seat. Deals first.
    Player,
    /// The automated seat.
    Opponent,
}

impl PlayerId {
    /// Get the seat index (0 for `Player`, 1 for `Opponent`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Player => 0,
            PlayerId::Opponent => 1,
        }
    }

    /// The seat that plays after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::Player => PlayerId::Opponent,
            PlayerId::Opponent => PlayerId::Player,
        }
    }

    /// Iterate over both seats in deal order.
    ///
    /// ```
    /// use rust_domino::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(seats, vec![PlayerId::Player, PlayerId::Opponent]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::Player, PlayerId::Opponent].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::Player => write!(f, "player"),
            PlayerId::Opponent => write!(f, "opponent"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_domino::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::new(|_| 0);
/// scores[PlayerId::Opponent] = 11;
///
/// assert_eq!(scores[PlayerId::Player], 0);
/// assert_eq!(scores[PlayerId::Opponent], 11);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    player: T,
    opponent: T,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            player: factory(PlayerId::Player),
            opponent: factory(PlayerId::Opponent),
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        match player {
            PlayerId::Player => &self.player,
            PlayerId::Opponent => &self.opponent,
        }
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        match player {
            PlayerId::Player => &mut self.player,
            PlayerId::Opponent => &mut self.opponent,
        }
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        [
            (PlayerId::Player, &self.player),
            (PlayerId::Opponent, &self.opponent),
        ]
        .into_iter()
    }

    /// Transform each entry, keeping the seat association.
    pub fn map<U>(&self, mut f: impl FnMut(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap {
            player: f(PlayerId::Player, &self.player),
            opponent: f(PlayerId::Opponent, &self.opponent),
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
