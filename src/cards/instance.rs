//! Card instances - runtime card state.
//!
//! `Card` holds the fields shared by minions and heroes: the current
//! numbers, presentation data and the two per-turn flags.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardType, CardView};

/// Runtime state shared by every card.
///
/// `attacked` and `frozen` are only ever true between the action that set
/// them and the next reset of the owner's turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub mana: i32,
    pub health: i32,
    pub attack_damage: i32,
    pub name: String,
    pub description: String,
    pub colors: Vec<String>,
    pub attacked: bool,
    pub frozen: bool,
}

impl Card {
    /// Instantiate from a definition with fresh flags.
    #[must_use]
    pub fn from_definition(definition: &CardDefinition) -> Self {
        Self {
            mana: definition.mana,
            health: definition.health,
            attack_damage: definition.attack_damage,
            name: definition.name.clone(),
            description: definition.description.clone(),
            colors: definition.colors.clone(),
            attacked: false,
            frozen: false,
        }
    }

    /// Clear both per-turn flags.
    pub fn reset_state(&mut self) {
        self.attacked = false;
        self.frozen = false;
    }

    /// Neither frozen nor already used this turn.
    #[must_use]
    pub fn can_act(&self) -> bool {
        !self.attacked && !self.frozen
    }

    /// Whether health has dropped to zero or below.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Presentation view. Heroes hide attack damage.
    #[must_use]
    pub fn view(&self, card_type: CardType) -> CardView {
        CardView {
            mana: self.mana,
            attack_damage: match card_type {
                CardType::Minion => Some(self.attack_damage),
                CardType::Hero => None,
            },
            health: self.health,
            description: self.description.clone(),
            colors: self.colors.clone(),
            name: self.name.clone(),
        }
    }
}
