//! Two-player minion duel.
//!
//! - Each player has a hero (30 health), a deck, a hand and two rows
//! - Minions are placed for mana, then attack minions or the enemy hero
//! - Tanks in the front row must be dealt with first
//! - A match ends when a hero's health drops to zero
//!
//! `Duel` implements `RulesEngine` and routes each action through a
//! `CommandTable`. `run_batch` plays every match of an input file.

mod batch;
mod commands;
mod game;

pub use batch::run_batch;
pub use commands::{CommandTable, Handler};
pub use game::{Duel, DuelBuilder, MatchSetup};
