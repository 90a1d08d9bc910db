//! Core types: sides, actions, mana, RNG, configuration and match state.
//!
//! These know nothing about individual card behavior. The rule resolvers in
//! `rules` and the orchestration in `games::duel` build on them.

pub mod player;
pub mod rng;
pub mod config;
pub mod mana;
pub mod action;
pub mod state;

pub use player::{PlayerMap, Side};
pub use rng::GameRng;
pub use config::RulesConfig;
pub use mana::ManaLedger;
pub use action::{Action, Command, Coordinates};
pub use state::{BatchContext, MatchState, PlayerState};
