//! Rules: the engine trait and the resolvers behind each mutating command.
//!
//! Resolvers are free functions over `MatchState`. Each one validates the
//! action completely, returning a `RuleError` on the first failed check,
//! before touching any state.
//!
//! - `placement`: hand to row
//! - `combat`: minion attacks on minions and heroes
//! - `abilities`: minion and hero abilities
//! - `turn`: turn end and round transition

pub mod abilities;
pub mod combat;
pub mod engine;
pub mod error;
pub mod placement;
pub mod turn;

pub use abilities::{use_hero_ability, use_minion_ability};
pub use combat::{attack_hero, attack_minion};
pub use engine::{ActionResult, GameResult, Outcome, RulesEngine};
pub use error::{RuleError, SetupError};
pub use placement::place_card;
pub use turn::end_turn;
