//! Player identification and per-player data storage.
//!
//! ## Side
//!
//! A duel always has exactly two participants, so players are identified
//! by a closed enum instead of a raw index. Input records still address
//! players as `1` and `2`; `Side::from_player_idx` does that translation.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two participants of a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The first player (`playerIdx` 1).
    One,
    /// The second player (`playerIdx` 2).
    Two,
}

impl Side {
    /// Both sides, player one first.
    pub const BOTH: [Side; 2] = [Side::One, Side::Two];

    /// Storage index (0 for player one, 1 for player two).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// The 1-based player number used by input and output records.
    #[must_use]
    pub const fn number(self) -> i32 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Resolve a `playerIdx` field. Anything other than `1` addresses
    /// player two.
    #[must_use]
    pub const fn from_player_idx(idx: i32) -> Side {
        if idx == 1 {
            Side::One
        } else {
            Side::Two
        }
    }

    /// Lowercase ordinal, as used in the "game ended" message.
    #[must_use]
    pub const fn ordinal(self) -> &'static str {
        match self {
            Side::One => "one",
            Side::Two => "two",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.ordinal())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use minion_duel::core::{PlayerMap, Side};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(0);
/// wins[Side::Two] += 1;
///
/// assert_eq!(wins[Side::One], 0);
/// assert_eq!(wins[Side::Two], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::One), factory(Side::Two)],
        }
    }

    /// Create a PlayerMap from already-built entries.
    pub fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::BOTH.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Side> for PlayerMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for PlayerMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
