//! Rules engine trait and action outcomes.
//!
//! A game implements `RulesEngine` to define:
//! - How each action modifies the match state
//! - What each action reports back
//! - When the match is over
//!
//! The engine owns rules and configuration; `MatchState` and
//! `BatchContext` are passed in so the same rules can drive any match.

use serde::{Deserialize, Serialize};

use super::error::RuleError;
use crate::cards::CardView;
use crate::core::{Action, BatchContext, MatchState, RulesConfig, Side};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The given side defeated the enemy hero.
    Winner(Side),
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        match self {
            GameResult::Winner(winner) => *winner == side,
        }
    }
}

/// What an action produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// State changed, nothing to report.
    Applied,
    /// A list of cards (hand, deck, frozen cards).
    Cards(Vec<CardView>),
    /// All four rows in table order.
    Table([Vec<CardView>; 4]),
    /// A single card (hero, card at position).
    Card(CardView),
    /// A number (mana, turn, tallies).
    Number(i32),
    /// The action broke a rule and changed nothing.
    Error(RuleError),
    /// The action defeated a hero; the given side won.
    GameEnded(Side),
    /// The action was not processed (match already over).
    Ignored,
}

impl Outcome {
    /// Whether this outcome produces an output record.
    #[must_use]
    pub fn is_reported(&self) -> bool {
        !matches!(self, Outcome::Applied | Outcome::Ignored)
    }
}

impl From<Result<(), RuleError>> for Outcome {
    fn from(result: Result<(), RuleError>) -> Self {
        match result {
            Ok(()) => Outcome::Applied,
            Err(err) => Outcome::Error(err),
        }
    }
}

/// An action paired with its outcome, in input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub action: Action,
    pub outcome: Outcome,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: must validate before mutating; a rejected action
///   returns `Outcome::Error` and leaves `state` unchanged
/// - `is_terminal`: return `None` while the match continues
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Apply an action to the match state.
    fn apply_action(&self, state: &mut MatchState, batch: &mut BatchContext, action: &Action) -> Outcome;

    /// Check if the match is over.
    fn is_terminal(&self, state: &MatchState) -> Option<GameResult>;

    /// Apply a sequence of actions. One result per action, in order.
    fn apply_all<'a>(
        &self,
        state: &mut MatchState,
        batch: &mut BatchContext,
        actions: impl IntoIterator<Item = &'a Action>,
    ) -> Vec<ActionResult> {
        actions
            .into_iter()
            .map(|action| ActionResult {
                action: action.clone(),
                outcome: self.apply_action(state, batch, action),
            })
            .collect()
    }
}
