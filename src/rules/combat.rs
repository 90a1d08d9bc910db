//! Minion attacks against minions and heroes.
//!
//! Ownership of a coordinate is decided by its row alone (see
//! `zones::board`). Every check runs before any mutation, so a rejected
//! attack leaves the match untouched.

use log::{debug, info};

use super::error::RuleError;
use crate::cards::Minion;
use crate::core::{Coordinates, MatchState, Side};
use crate::zones::{Board, Slot};

/// Resolve a coordinate to an occupied slot.
pub(crate) fn minion_at(board: &Board, coordinates: Coordinates) -> Result<(Slot, &Minion), RuleError> {
    let slot = Slot::from_coordinates(coordinates).ok_or(RuleError::NoCardAtPosition)?;
    let minion = board.minion(slot).ok_or(RuleError::NoCardAtPosition)?;
    Ok((slot, minion))
}

/// Tank protection: while `defender` has a tank in its front row, only a
/// tank may be targeted.
pub(crate) fn check_tank(board: &Board, defender: Side, target_is_tank: bool) -> Result<(), RuleError> {
    if !target_is_tank && board.front_has_tank(defender) {
        return Err(RuleError::TankNotAttacked);
    }
    Ok(())
}

/// Attack the minion at `attacked` with the minion at `attacker`.
///
/// Checks, in order: both coordinates hold a minion, they belong to
/// different players, the attacker has not attacked this turn, the attacker
/// is not frozen, tank protection. The defender loses health equal to the
/// attacker's damage and is removed at zero or below.
pub fn attack_minion(
    state: &mut MatchState,
    attacker: Coordinates,
    attacked: Coordinates,
) -> Result<(), RuleError> {
    let board = &mut state.board;
    let (from, user) = minion_at(board, attacker)?;
    let (to, target) = minion_at(board, attacked)?;

    if from.side() == to.side() {
        return Err(RuleError::NotEnemyCard);
    }
    if user.card.attacked {
        return Err(RuleError::AlreadyAttacked);
    }
    if user.card.frozen {
        return Err(RuleError::Frozen);
    }
    check_tank(board, to.side(), target.is_tank())?;

    let damage = user.card.attack_damage;
    if let Some(user) = board.minion_mut(from) {
        user.card.attacked = true;
    }

    let row = board.row_mut(to.row);
    let defeated = match row.get_mut(to.index) {
        Some(target) => {
            target.card.health -= damage;
            target.card.is_defeated()
        }
        None => false,
    };
    if defeated {
        let removed = row.remove(to.index);
        debug!("{} destroyed by {} damage", removed.card.name, damage);
    }
    Ok(())
}

/// Attack the opposing hero with the minion at `attacker`.
///
/// The opposing hero is the one across from the attacker's row. Checks, in
/// order: the coordinate holds a minion, it is not frozen, it has not
/// attacked this turn, tank protection (a hero is never a tank). Returns
/// the attacker's side when the hero falls.
pub fn attack_hero(state: &mut MatchState, attacker: Coordinates) -> Result<Option<Side>, RuleError> {
    let (from, user) = minion_at(&state.board, attacker)?;
    let side = from.side();
    let defender = side.opponent();

    if user.card.frozen {
        return Err(RuleError::Frozen);
    }
    if user.card.attacked {
        return Err(RuleError::AlreadyAttacked);
    }
    check_tank(&state.board, defender, false)?;

    let damage = user.card.attack_damage;
    if let Some(user) = state.board.minion_mut(from) {
        user.card.attacked = true;
    }

    let hero = &mut state.players[defender].hero;
    hero.take_damage(damage);
    debug!("{side} hit the enemy hero for {damage}, {} health left", hero.card.health);

    if hero.is_alive() {
        return Ok(None);
    }

    info!("{side} killed the enemy hero");
    state.winner = Some(side);
    Ok(Some(side))
}
