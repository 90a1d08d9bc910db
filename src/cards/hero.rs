//! Hero kinds and their row abilities.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardType, CardView};
use super::instance::Card;
use super::minion::Targeting;
use crate::core::RulesConfig;
use crate::zones::Row;

/// The four hero cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroKind {
    EmpressThorina,
    GeneralKocioraw,
    KingMudface,
    LordRoyce,
}

impl HeroKind {
    pub const ALL: [HeroKind; 4] = [
        HeroKind::EmpressThorina,
        HeroKind::GeneralKocioraw,
        HeroKind::KingMudface,
        HeroKind::LordRoyce,
    ];

    /// The card name this kind is registered under.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HeroKind::EmpressThorina => "Empress Thorina",
            HeroKind::GeneralKocioraw => "General Kocioraw",
            HeroKind::KingMudface => "King Mudface",
            HeroKind::LordRoyce => "Lord Royce",
        }
    }

    /// Whose row the ability must be cast on.
    #[must_use]
    pub const fn targeting(self) -> Targeting {
        match self {
            HeroKind::EmpressThorina | HeroKind::LordRoyce => Targeting::Enemy,
            HeroKind::GeneralKocioraw | HeroKind::KingMudface => Targeting::Own,
        }
    }

    /// Apply the ability to every minion of `row` (or, for Empress Thorina,
    /// to the healthiest one).
    pub fn apply_ability(self, row: &mut Row, config: &RulesConfig) {
        match self {
            HeroKind::EmpressThorina => {
                if let Some(index) = row.healthiest() {
                    row.remove(index);
                }
            }
            HeroKind::GeneralKocioraw => {
                for minion in row.iter_mut() {
                    minion.card.attack_damage += config.hero_buff;
                }
            }
            HeroKind::KingMudface => {
                for minion in row.iter_mut() {
                    minion.card.health += config.hero_buff;
                }
            }
            HeroKind::LordRoyce => {
                for minion in row.iter_mut() {
                    minion.card.frozen = true;
                }
            }
        }
    }
}

impl std::fmt::Display for HeroKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A player's hero. Never placed on the table; defeated when health <= 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hero {
    pub kind: HeroKind,
    pub card: Card,
}

impl Hero {
    /// Build a hero with the configured starting health.
    #[must_use]
    pub fn new(kind: HeroKind, definition: &CardDefinition, config: &RulesConfig) -> Self {
        let mut card = Card::from_definition(definition);
        card.health = config.hero_health;
        Self { kind, card }
    }

    /// Cast the hero ability on `row` and mark the hero as used this turn.
    pub fn use_ability(&mut self, row: &mut Row, config: &RulesConfig) {
        self.kind.apply_ability(row, config);
        self.card.attacked = true;
    }

    /// Subtract `damage` from health.
    pub fn take_damage(&mut self, damage: i32) {
        self.card.health -= damage;
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.card.is_defeated()
    }

    #[must_use]
    pub fn view(&self) -> CardView {
        self.card.view(CardType::Hero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Minion, MinionKind};

    fn row_with_health(healths: &[i32]) -> Row {
        let mut row = Row::new();
        for (i, &health) in healths.iter().enumerate() {
            let def = CardDefinition::minion(format!("m{i}"), 1, health, 1);
            row.push(Minion::new(MinionKind::Sentinel, &def));
        }
        row
    }

    fn hero(kind: HeroKind) -> Hero {
        Hero::new(kind, &CardDefinition::hero(kind.name(), 2), &RulesConfig::default())
    }

    #[test]
    fn test_hero_starts_at_configured_health() {
        let hero = hero(HeroKind::LordRoyce);
        assert_eq!(hero.card.health, 30);
        assert!(hero.is_alive());
        assert_eq!(hero.view().attack_damage, None);
    }

    #[test]
    fn test_thorina_removes_first_of_tied_maximum() {
        let mut row = row_with_health(&[3, 5, 5, 2]);
        let mut thorina = hero(HeroKind::EmpressThorina);

        thorina.use_ability(&mut row, &RulesConfig::default());

        assert_eq!(row.len(), 3);
        let names: Vec<_> = row.iter().map(|m| m.card.name.as_str()).collect();
        assert_eq!(names, vec!["m0", "m2", "m3"]);
        assert!(thorina.card.attacked);
    }

    #[test]
    fn test_thorina_on_empty_row() {
        let mut row = Row::new();
        let mut thorina = hero(HeroKind::EmpressThorina);

        thorina.use_ability(&mut row, &RulesConfig::default());

        assert!(row.is_empty());
        assert!(thorina.card.attacked);
    }

    #[test]
    fn test_kocioraw_and_mudface_buff_row() {
        let config = RulesConfig::default();
        let mut row = row_with_health(&[1, 2]);

        hero(HeroKind::GeneralKocioraw).use_ability(&mut row, &config);
        hero(HeroKind::KingMudface).use_ability(&mut row, &config);

        let stats: Vec<_> = row.iter().map(|m| (m.card.health, m.card.attack_damage)).collect();
        assert_eq!(stats, vec![(2, 2), (3, 2)]);
    }

    #[test]
    fn test_royce_freezes_row() {
        let mut row = row_with_health(&[1, 2, 3]);

        hero(HeroKind::LordRoyce).use_ability(&mut row, &RulesConfig::default());

        assert!(row.iter().all(|m| m.card.frozen));
    }

    #[test]
    fn test_targeting() {
        assert_eq!(HeroKind::EmpressThorina.targeting(), Targeting::Enemy);
        assert_eq!(HeroKind::LordRoyce.targeting(), Targeting::Enemy);
        assert_eq!(HeroKind::GeneralKocioraw.targeting(), Targeting::Own);
        assert_eq!(HeroKind::KingMudface.targeting(), Targeting::Own);
    }
}
