//! Rules configuration.
//!
//! Every numeric rule constant lives in `RulesConfig` and is passed to the
//! match at construction. `RulesConfig::default()` gives the standard duel.

use serde::{Deserialize, Serialize};

/// Numeric rule constants for a duel.
///
/// ## Example
///
/// ```
/// use minion_duel::core::RulesConfig;
///
/// let config = RulesConfig::default().with_row_capacity(3);
/// assert_eq!(config.row_capacity, 3);
/// assert_eq!(config.hero_health, 30);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Maximum minions per row.
    pub row_capacity: usize,

    /// Health every hero starts a match with.
    pub hero_health: i32,

    /// Mana balance at match start.
    pub starting_mana: i32,

    /// Mana growth step at match start.
    pub starting_mana_step: i32,

    /// Upper bound for the mana growth step.
    pub max_mana_step: i32,

    /// Health restored by Disciple.
    pub heal_amount: i32,

    /// Attack damage removed by The Ripper.
    pub weaken_amount: i32,

    /// Per-minion bonus granted by General Kocioraw and King Mudface.
    pub hero_buff: i32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            row_capacity: 5,
            hero_health: 30,
            starting_mana: 1,
            starting_mana_step: 1,
            max_mana_step: 10,
            heal_amount: 2,
            weaken_amount: 2,
            hero_buff: 1,
        }
    }
}

impl RulesConfig {
    /// Set the row capacity.
    #[must_use]
    pub fn with_row_capacity(mut self, capacity: usize) -> Self {
        self.row_capacity = capacity;
        self
    }

    /// Set the hero starting health.
    #[must_use]
    pub fn with_hero_health(mut self, health: i32) -> Self {
        self.hero_health = health;
        self
    }

    /// Set the starting mana balance and growth step.
    #[must_use]
    pub fn with_starting_mana(mut self, mana: i32, step: i32) -> Self {
        self.starting_mana = mana;
        self.starting_mana_step = step;
        self
    }

    /// Set the growth step cap.
    #[must_use]
    pub fn with_max_mana_step(mut self, cap: i32) -> Self {
        self.max_mana_step = cap;
        self
    }
}
