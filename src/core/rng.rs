//! Seeded deck shuffling.
//!
//! Every match carries a shuffle seed. At setup each player's current deck
//! is permuted by a fresh `GameRng` built from that seed, so replaying a
//! match input reproduces the same draws.
//!
//! ```
//! use minion_duel::core::GameRng;
//!
//! let mut deck = vec!["Goliath", "Miraj", "Disciple", "Warden"];
//! let mut replay = deck.clone();
//!
//! GameRng::from_match_seed(-3).shuffle(&mut deck);
//! GameRng::from_match_seed(-3).shuffle(&mut replay);
//!
//! assert_eq!(deck, replay);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Shuffler for one deck. ChaCha8 keeps permutations stable across
/// platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Build from the signed `shuffleSeed` of a match. Negative seeds keep
    /// their bit pattern.
    #[must_use]
    pub fn from_match_seed(seed: i64) -> Self {
        Self::new(seed as u64)
    }

    /// Permute `cards` in place.
    pub fn shuffle<T>(&mut self, cards: &mut [T]) {
        cards.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Vec<&'static str> {
        vec![
            "Sentinel", "Berserker", "Goliath", "Warden", "Miraj", "The Ripper", "Disciple",
            "The Cursed One",
        ]
    }

    #[test]
    fn test_same_seed_same_draw_order() {
        let mut first = deck();
        let mut second = deck();

        GameRng::from_match_seed(13).shuffle(&mut first);
        GameRng::from_match_seed(13).shuffle(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_seed_changes_draw_order() {
        let mut first = deck();
        let mut second = deck();

        GameRng::from_match_seed(1).shuffle(&mut first);
        GameRng::from_match_seed(2).shuffle(&mut second);

        assert_ne!(first, second);
    }

    #[test]
    fn test_shuffle_keeps_every_card() {
        let mut shuffled = deck();
        GameRng::from_match_seed(99).shuffle(&mut shuffled);

        let mut expected = deck();
        expected.sort_unstable();
        shuffled.sort_unstable();
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn test_negative_match_seed_keeps_bits() {
        let mut signed = deck();
        let mut unsigned = deck();

        GameRng::from_match_seed(-1).shuffle(&mut signed);
        GameRng::new(u64::MAX).shuffle(&mut unsigned);

        assert_eq!(signed, unsigned);
    }
}
