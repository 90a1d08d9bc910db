//! # minion-duel
//!
//! A deterministic rules engine for a two-player minion card battle.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every rule resolver runs all of its checks
//!    before touching state. A rejected action leaves the match unchanged.
//!
//! 2. **Closed card set**: each of the twelve card names maps to one
//!    `MinionKind` or `HeroKind`. Unknown names fail match setup.
//!
//! 3. **No globals**: rules constants live in `RulesConfig`, cross-match
//!    tallies in `BatchContext`, both passed explicitly.
//!
//! ## Architecture
//!
//! - **Typed coordinates**: table rows are `RowSlot { side, kind }`. Input
//!   row indices are decoded in one place (`zones::board`).
//!
//! - **Persistent decks**: deck templates are `im::Vector`s, so selecting a
//!   deck for a new match is O(1).
//!
//! - **Deterministic shuffle**: ChaCha8 seeded by the match seed.
//!
//! ## Modules
//!
//! - `core`: sides, actions, mana, RNG, configuration, match state
//! - `zones`: deck, rows and the table
//! - `cards`: card definitions, minion and hero kinds, the name registry
//! - `rules`: RulesEngine trait, rule errors and the action resolvers
//! - `games`: the duel itself (setup, command dispatch, batch runs)
//! - `io`: input and output records

pub mod core;
pub mod zones;
pub mod cards;
pub mod rules;
pub mod games;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    Side, PlayerMap,
    GameRng,
    RulesConfig, ManaLedger,
    Action, Command, Coordinates,
    BatchContext, MatchState, PlayerState,
};

pub use crate::zones::{Board, DeckManager, Row, RowKind, RowSlot, Slot};

pub use crate::cards::{
    CardDefinition, CardType, CardView, Card,
    Minion, MinionKind, Hero, HeroKind,
    CardKind, CardRegistry,
};

pub use crate::rules::{ActionResult, GameResult, Outcome, RuleError, RulesEngine, SetupError};

pub use crate::games::duel::{run_batch, Duel, DuelBuilder, MatchSetup};
