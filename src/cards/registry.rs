//! Card registry: the fixed, total mapping from card name to behavior.
//!
//! Every name resolves to exactly one `CardKind`. Constructing a card whose
//! name is not registered is a `SetupError`, never a silent fallback.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardType};
use super::hero::{Hero, HeroKind};
use super::minion::{Minion, MinionKind};
use crate::core::RulesConfig;
use crate::rules::SetupError;

/// The behavior a card name maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardKind {
    Minion(MinionKind),
    Hero(HeroKind),
}

impl CardKind {
    /// Which family this kind belongs to.
    #[must_use]
    pub const fn card_type(self) -> CardType {
        match self {
            CardKind::Minion(_) => CardType::Minion,
            CardKind::Hero(_) => CardType::Hero,
        }
    }
}

/// Name lookup for all twelve cards.
///
/// ## Example
///
/// ```
/// use minion_duel::cards::{CardDefinition, CardRegistry, CardType};
///
/// let registry = CardRegistry::standard();
///
/// assert_eq!(registry.card_type("Warden"), Some(CardType::Minion));
/// assert_eq!(registry.card_type("Lord Royce"), Some(CardType::Hero));
/// assert!(registry.minion(&CardDefinition::minion("Dragon", 1, 1, 1)).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CardRegistry {
    kinds: FxHashMap<&'static str, CardKind>,
}

impl Default for CardRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl CardRegistry {
    /// The registry holding every minion and hero kind.
    #[must_use]
    pub fn standard() -> Self {
        let minions = MinionKind::ALL
            .into_iter()
            .map(|kind| (kind.name(), CardKind::Minion(kind)));
        let heroes = HeroKind::ALL
            .into_iter()
            .map(|kind| (kind.name(), CardKind::Hero(kind)));

        Self {
            kinds: minions.chain(heroes).collect(),
        }
    }

    /// Look up a card name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<CardKind> {
        self.kinds.get(name).copied()
    }

    /// The family of a card name, `None` for unknown names.
    #[must_use]
    pub fn card_type(&self, name: &str) -> Option<CardType> {
        self.get(name).map(CardKind::card_type)
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Instantiate a minion from its definition.
    pub fn minion(&self, definition: &CardDefinition) -> Result<Minion, SetupError> {
        match self.get(&definition.name) {
            Some(CardKind::Minion(kind)) => Ok(Minion::new(kind, definition)),
            Some(CardKind::Hero(_)) => Err(SetupError::NotAMinion {
                name: definition.name.clone(),
            }),
            None => Err(SetupError::UnknownCard {
                name: definition.name.clone(),
            }),
        }
    }

    /// Instantiate a hero from its definition.
    pub fn hero(&self, definition: &CardDefinition, config: &RulesConfig) -> Result<Hero, SetupError> {
        match self.get(&definition.name) {
            Some(CardKind::Hero(kind)) => Ok(Hero::new(kind, definition, config)),
            Some(CardKind::Minion(_)) => Err(SetupError::NotAHero {
                name: definition.name.clone(),
            }),
            None => Err(SetupError::UnknownCard {
                name: definition.name.clone(),
            }),
        }
    }
}
