//! Rule violations and setup failures.
//!
//! `RuleError` is recoverable: the action is rejected with no state change
//! and the match continues. `SetupError` is fatal for the batch.

use serde::{Deserialize, Serialize};

/// A rejected action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleError {
    /// Card cost exceeds the player's balance.
    NotEnoughMana,
    /// Destination row is at capacity.
    RowFull,
    /// Target must belong to the opponent.
    NotEnemyCard,
    /// Acting minion already attacked or used its ability this turn.
    AlreadyAttacked,
    /// Acting minion is frozen.
    Frozen,
    /// Opponent's front row has a tank and the target is not one.
    TankNotAttacked,
    /// Target must belong to the acting player.
    NotOwnCard,
    /// Hero cost exceeds the player's balance.
    NotEnoughManaForHero,
    /// Hero already used its ability this turn.
    HeroAlreadyAttacked,
    /// Hero ability needs an enemy row.
    RowNotEnemy,
    /// Hero ability needs one of the caster's rows.
    RowNotOwn,
    /// Nothing at the given hand index or table coordinate.
    NoCardAtPosition,
    /// Row index outside the table.
    InvalidRow,
}

impl RuleError {
    /// User-facing message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            RuleError::NotEnoughMana => "Not enough mana to place card on table.",
            RuleError::RowFull => "Cannot place card on table since row is full.",
            RuleError::NotEnemyCard => "Attacked card does not belong to the enemy.",
            RuleError::AlreadyAttacked => "Attacker card has already attacked this turn.",
            RuleError::Frozen => "Attacker card is frozen.",
            RuleError::TankNotAttacked => "Attacked card is not of type 'Tank'.",
            RuleError::NotOwnCard => "Attacked card does not belong to the current player.",
            RuleError::NotEnoughManaForHero => "Not enough mana to use hero's ability.",
            RuleError::HeroAlreadyAttacked => "Hero has already attacked this turn.",
            RuleError::RowNotEnemy => "Selected row does not belong to the enemy.",
            RuleError::RowNotOwn => "Selected row does not belong to the current player.",
            RuleError::NoCardAtPosition => "No card available at that position.",
            RuleError::InvalidRow => "Selected row does not exist.",
        }
    }
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for RuleError {}

/// Malformed match input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// No card is registered under this name.
    UnknownCard { name: String },
    /// A hero name appeared in a deck.
    NotAMinion { name: String },
    /// A minion name was given as a hero.
    NotAHero { name: String },
    /// A player brought no decks to choose from.
    NoDecks { player: i32 },
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::UnknownCard { name } => write!(f, "unknown card name {name:?}"),
            SetupError::NotAMinion { name } => write!(f, "{name:?} is a hero, expected a minion"),
            SetupError::NotAHero { name } => write!(f, "{name:?} is a minion, expected a hero"),
            SetupError::NoDecks { player } => write!(f, "player {player} has no decks"),
        }
    }
}

impl std::error::Error for SetupError {}
