//! Minion and hero abilities.

use log::debug;

use super::combat::{check_tank, minion_at};
use super::error::RuleError;
use crate::cards::Targeting;
use crate::core::{Coordinates, MatchState, RulesConfig};
use crate::zones::RowSlot;

/// Use the ability of the minion at `attacker` on the minion at `attacked`.
///
/// Checks, in order: both coordinates hold a minion, the user is not
/// frozen, it has not acted this turn, then the targeting rule of its kind:
/// own-side abilities reject enemy targets, enemy-side abilities reject own
/// targets and obey tank protection. Attack-only minions pass through and
/// nothing happens.
pub fn use_minion_ability(
    state: &mut MatchState,
    config: &RulesConfig,
    attacker: Coordinates,
    attacked: Coordinates,
) -> Result<(), RuleError> {
    let board = &mut state.board;
    let (from, user) = minion_at(board, attacker)?;
    let (to, target) = minion_at(board, attacked)?;

    if user.card.frozen {
        return Err(RuleError::Frozen);
    }
    if user.card.attacked {
        return Err(RuleError::AlreadyAttacked);
    }

    let same_side = from.side() == to.side();
    match user.kind.targeting() {
        Some(Targeting::Own) if !same_side => return Err(RuleError::NotOwnCard),
        Some(Targeting::Enemy) => {
            if same_side {
                return Err(RuleError::NotEnemyCard);
            }
            check_tank(board, to.side(), target.is_tank())?;
        }
        _ => {}
    }

    let kind = user.kind;
    let targets = board
        .ability_targets(from, to)
        .ok_or(RuleError::NoCardAtPosition)?;
    let outcome = kind.apply_ability(targets, config);
    debug!("{kind} used its ability on {:?}", to);

    if outcome.target_defeated {
        let removed = board.row_mut(to.row).remove(to.index);
        debug!("{} destroyed by {kind}", removed.card.name);
    }
    Ok(())
}

/// Use the active player's hero ability on table row `affected_row`.
///
/// Checks, in order: the hero's cost is affordable, the hero has not acted
/// this turn, the row exists, the row belongs to the side the hero targets.
/// On success the ability is applied and its cost debited.
pub fn use_hero_ability(
    state: &mut MatchState,
    config: &RulesConfig,
    affected_row: i32,
) -> Result<(), RuleError> {
    let side = state.active;
    let player = &state.players[side];
    let hero = &player.hero;

    if !player.mana.can_afford(hero.card.mana) {
        return Err(RuleError::NotEnoughManaForHero);
    }
    if hero.card.attacked {
        return Err(RuleError::HeroAlreadyAttacked);
    }

    let row = RowSlot::from_table_index(affected_row).ok_or(RuleError::InvalidRow)?;
    match hero.kind.targeting() {
        Targeting::Enemy if row.side == side => return Err(RuleError::RowNotEnemy),
        Targeting::Own if row.side != side => return Err(RuleError::RowNotOwn),
        _ => {}
    }

    let player = &mut state.players[side];
    let cost = player.hero.card.mana;
    player.hero.use_ability(state.board.row_mut(row), config);
    player.mana.spend(cost);

    debug!("{side} used {} on row {affected_row}", player.hero.kind);
    Ok(())
}
