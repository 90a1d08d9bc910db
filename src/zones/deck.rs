//! Deck templates and the current deck of a match.
//!
//! A player brings several template decks. Selecting one copies it into the
//! current deck; `im::Vector` makes that copy O(1) and the templates stay
//! untouched as the current deck is shuffled and drawn from.

use im::Vector;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::cards::Minion;
use crate::core::GameRng;

/// A player's template decks plus the deck being drawn from.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeckManager {
    decks: Vec<Vector<Minion>>,
    current: Vector<Minion>,
}

impl DeckManager {
    /// Wrap the template decks. The current deck starts empty.
    #[must_use]
    pub fn new(decks: Vec<Vector<Minion>>) -> Self {
        Self {
            decks,
            current: Vector::new(),
        }
    }

    /// Copy template `index` into the current deck.
    ///
    /// An out-of-range index falls back to the first template. Returns the
    /// index actually used, or `None` if there are no templates.
    pub fn select(&mut self, index: i32) -> Option<usize> {
        let chosen = match usize::try_from(index) {
            Ok(i) if i < self.decks.len() => i,
            _ => {
                warn!(
                    "deck index {index} out of range for {} decks, using deck 0",
                    self.decks.len()
                );
                0
            }
        };

        let template = self.decks.get(chosen)?;
        self.current = template.clone();
        Some(chosen)
    }

    /// Permute the current deck.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Minion> = self.current.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.current = cards.into_iter().collect();
    }

    /// Take the first card of the current deck, `None` when it is empty.
    pub fn draw(&mut self) -> Option<Minion> {
        self.current.pop_front()
    }

    /// The remaining cards in draw order.
    #[must_use]
    pub fn current(&self) -> &Vector<Minion> {
        &self.current
    }

    /// Cards left in the current deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}
