//! Card definitions - static card data.
//!
//! `CardDefinition` is the card as written in a deck list or hero slot:
//! name, description, colors and starting numbers. Runtime state (current
//! health, frozen/attacked flags) lives on `Card` in `instance`.

use serde::{Deserialize, Serialize};

/// Static card data as supplied by match input.
///
/// Numeric fields missing from the input default to zero; heroes, for
/// example, are usually listed without `health`.
///
/// ## Example
///
/// ```
/// use minion_duel::cards::CardDefinition;
///
/// let goliath = CardDefinition::minion("Goliath", 2, 5, 1);
/// assert_eq!(goliath.health, 5);
/// assert_eq!(goliath.attack_damage, 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardDefinition {
    pub mana: i32,
    pub attack_damage: i32,
    pub health: i32,
    pub description: String,
    pub colors: Vec<String>,
    pub name: String,
}

impl CardDefinition {
    /// A minion definition with empty description and colors.
    pub fn minion(name: impl Into<String>, mana: i32, health: i32, attack_damage: i32) -> Self {
        Self {
            mana,
            attack_damage,
            health,
            name: name.into(),
            ..Self::default()
        }
    }

    /// A hero definition. Heroes get their health from the rules config.
    pub fn hero(name: impl Into<String>, mana: i32) -> Self {
        Self {
            mana,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a color tag.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.colors.push(color.into());
        self
    }
}

/// The two card families. Derived purely from the card name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Minion,
    Hero,
}

/// What the presentation layer sees of a card.
///
/// Heroes expose health only; minions expose health and attack damage.
/// Frozen/attacked flags are never part of a view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub mana: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_damage: Option<i32>,
    pub health: i32,
    pub description: String,
    pub colors: Vec<String>,
    pub name: String,
}
