//! Match state and the batch context.
//!
//! ## MatchState
//!
//! Everything owned by a single match:
//! - Both players (hand, deck, mana, hero, turn-ended flag)
//! - The four table rows
//! - The active side and, once a hero falls, the winner
//!
//! ## BatchContext
//!
//! Counters that outlive a match: win tallies and the round counter. One
//! context is created per run and passed by reference to every match.

use serde::{Deserialize, Serialize};

use super::mana::ManaLedger;
use super::player::{PlayerMap, Side};
use crate::cards::{Hero, Minion};
use crate::zones::{Board, DeckManager};

/// One player's side of a match.
#[derive(Clone, Debug)]
pub struct PlayerState {
    /// Cards in hand, in draw order.
    pub hand: Vec<Minion>,
    pub deck: DeckManager,
    pub mana: ManaLedger,
    pub hero: Hero,
    /// Set by `endPlayerTurn`, cleared at the round transition.
    pub turn_ended: bool,
}

impl PlayerState {
    /// A player with an empty hand and no deck selected yet.
    #[must_use]
    pub fn new(deck: DeckManager, hero: Hero, mana: ManaLedger) -> Self {
        Self {
            hand: Vec::new(),
            deck,
            mana,
            hero,
            turn_ended: false,
        }
    }

    /// Move the top card of the deck into the hand. Does nothing on an
    /// empty deck.
    pub fn draw_card(&mut self) {
        if let Some(card) = self.deck.draw() {
            self.hand.push(card);
        }
    }
}

/// Complete state of one match.
#[derive(Clone, Debug)]
pub struct MatchState {
    pub players: PlayerMap<PlayerState>,
    pub board: Board,
    /// Side whose turn it is.
    pub active: Side,
    /// Set when a hero's health drops to zero.
    pub winner: Option<Side>,
}

impl MatchState {
    /// A fresh match with an empty table.
    #[must_use]
    pub fn new(players: PlayerMap<PlayerState>, starting: Side) -> Self {
        Self {
            players,
            board: Board::new(),
            active: starting,
            winner: None,
        }
    }

    #[must_use]
    pub fn player(&self, side: Side) -> &PlayerState {
        &self.players[side]
    }

    pub fn player_mut(&mut self, side: Side) -> &mut PlayerState {
        &mut self.players[side]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> &PlayerState {
        &self.players[self.active]
    }

    /// Whether a hero has been defeated.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}

/// Cross-match counters for one batch run.
///
/// ```
/// use minion_duel::core::{BatchContext, Side};
///
/// let mut context = BatchContext::new();
/// context.record_win(Side::Two);
/// context.record_win(Side::Two);
///
/// assert_eq!(context.wins(Side::Two), 2);
/// assert_eq!(context.total_games(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchContext {
    pub player_one_wins: i32,
    pub player_two_wins: i32,
    /// Rounds completed across every match of the run.
    pub round: u32,
}

impl BatchContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a win to `side`.
    pub fn record_win(&mut self, side: Side) {
        match side {
            Side::One => self.player_one_wins += 1,
            Side::Two => self.player_two_wins += 1,
        }
    }

    #[must_use]
    pub fn wins(&self, side: Side) -> i32 {
        match side {
            Side::One => self.player_one_wins,
            Side::Two => self.player_two_wins,
        }
    }

    /// Matches that ended with a winner.
    #[must_use]
    pub fn total_games(&self) -> i32 {
        self.player_one_wins + self.player_two_wins
    }
}
