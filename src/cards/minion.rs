//! Minion kinds and their abilities.
//!
//! Each minion name maps to one `MinionKind`. The kind decides the
//! placement row, whether the minion is a tank, who its ability may target,
//! and what the ability does.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardType, CardView};
use super::instance::Card;
use crate::core::RulesConfig;
use crate::zones::RowKind;

/// The eight minion cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinionKind {
    Berserker,
    Disciple,
    Goliath,
    Miraj,
    Sentinel,
    TheCursedOne,
    TheRipper,
    Warden,
}

/// Which side an ability may target, relative to the minion using it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Targeting {
    /// Only cards of the caster's own player.
    Own,
    /// Only enemy cards, subject to tank protection.
    Enemy,
}

impl MinionKind {
    pub const ALL: [MinionKind; 8] = [
        MinionKind::Berserker,
        MinionKind::Disciple,
        MinionKind::Goliath,
        MinionKind::Miraj,
        MinionKind::Sentinel,
        MinionKind::TheCursedOne,
        MinionKind::TheRipper,
        MinionKind::Warden,
    ];

    /// The card name this kind is registered under.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MinionKind::Berserker => "Berserker",
            MinionKind::Disciple => "Disciple",
            MinionKind::Goliath => "Goliath",
            MinionKind::Miraj => "Miraj",
            MinionKind::Sentinel => "Sentinel",
            MinionKind::TheCursedOne => "The Cursed One",
            MinionKind::TheRipper => "The Ripper",
            MinionKind::Warden => "Warden",
        }
    }

    /// Tanks must be attacked before anything else on their side.
    #[must_use]
    pub const fn is_tank(self) -> bool {
        matches!(self, MinionKind::Goliath | MinionKind::Warden)
    }

    /// The row this minion is placed into.
    #[must_use]
    pub const fn row_kind(self) -> RowKind {
        match self {
            MinionKind::TheRipper | MinionKind::Miraj | MinionKind::Goliath | MinionKind::Warden => {
                RowKind::Front
            }
            _ => RowKind::Back,
        }
    }

    /// Ability targeting rule, or `None` for attack-only minions.
    #[must_use]
    pub const fn targeting(self) -> Option<Targeting> {
        match self {
            MinionKind::Disciple => Some(Targeting::Own),
            MinionKind::Miraj | MinionKind::TheCursedOne | MinionKind::TheRipper => {
                Some(Targeting::Enemy)
            }
            _ => None,
        }
    }

    /// Apply this kind's ability.
    ///
    /// Attack-only kinds do nothing and leave the user's flags untouched.
    pub fn apply_ability(self, targets: AbilityTargets<'_>, config: &RulesConfig) -> AbilityOutcome {
        if self.targeting().is_none() {
            return AbilityOutcome::default();
        }

        match targets {
            AbilityTargets::SelfTarget(minion) => {
                let user_health = minion.card.health;
                let swapped = self.affect_target(&mut minion.card, user_health, config);
                if let Some(health) = swapped {
                    minion.card.health = health;
                }
                minion.card.attacked = true;
                AbilityOutcome {
                    target_defeated: self.removes_target() && minion.card.is_defeated(),
                }
            }
            AbilityTargets::Pair { user, target } => {
                let swapped = self.affect_target(&mut target.card, user.card.health, config);
                if let Some(health) = swapped {
                    user.card.health = health;
                }
                user.card.attacked = true;
                AbilityOutcome {
                    target_defeated: self.removes_target() && target.card.is_defeated(),
                }
            }
        }
    }

    /// Mutate the target. Returns the user's new health when the ability
    /// swaps health with the user.
    fn affect_target(self, target: &mut Card, user_health: i32, config: &RulesConfig) -> Option<i32> {
        match self {
            MinionKind::Disciple => {
                target.health += config.heal_amount;
                None
            }
            MinionKind::Miraj => Some(std::mem::replace(&mut target.health, user_health)),
            MinionKind::TheCursedOne => {
                std::mem::swap(&mut target.health, &mut target.attack_damage);
                None
            }
            MinionKind::TheRipper => {
                target.attack_damage = (target.attack_damage - config.weaken_amount).max(0);
                None
            }
            MinionKind::Berserker | MinionKind::Goliath | MinionKind::Sentinel | MinionKind::Warden => {
                None
            }
        }
    }

    const fn removes_target(self) -> bool {
        matches!(self, MinionKind::TheCursedOne)
    }
}

impl std::fmt::Display for MinionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The cards an ability acts on.
///
/// Disciple may target itself, in which case user and target are the same
/// card and only one mutable borrow exists.
#[derive(Debug)]
pub enum AbilityTargets<'a> {
    SelfTarget(&'a mut Minion),
    Pair {
        user: &'a mut Minion,
        target: &'a mut Minion,
    },
}

/// Result of applying an ability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AbilityOutcome {
    /// The target must be removed from its row.
    pub target_defeated: bool,
}

/// A minion: shared card state plus its kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Minion {
    pub kind: MinionKind,
    pub card: Card,
}

impl Minion {
    /// Build a minion of a known kind.
    #[must_use]
    pub fn new(kind: MinionKind, definition: &CardDefinition) -> Self {
        Self {
            kind,
            card: Card::from_definition(definition),
        }
    }

    #[must_use]
    pub fn is_tank(&self) -> bool {
        self.kind.is_tank()
    }

    #[must_use]
    pub fn row_kind(&self) -> RowKind {
        self.kind.row_kind()
    }

    #[must_use]
    pub fn view(&self) -> CardView {
        self.card.view(CardType::Minion)
    }
}
