//! Card system: definitions, runtime instances, kinds and registry.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Static card data as supplied by match input
//! - `Card`: Runtime state shared by minions and heroes
//! - `Minion` / `MinionKind`: Table cards and their abilities
//! - `Hero` / `HeroKind`: One per player, row abilities
//! - `CardRegistry`: Fixed name -> kind mapping

pub mod definition;
pub mod hero;
pub mod instance;
pub mod minion;
pub mod registry;

pub use definition::{CardDefinition, CardType, CardView};
pub use hero::{Hero, HeroKind};
pub use instance::Card;
pub use minion::{AbilityOutcome, AbilityTargets, Minion, MinionKind, Targeting};
pub use registry::{CardKind, CardRegistry};
