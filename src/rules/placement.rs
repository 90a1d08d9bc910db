//! Moving a minion from hand to its row.

use log::debug;

use super::error::RuleError;
use crate::core::{MatchState, RulesConfig};
use crate::zones::RowSlot;

/// Place the active player's card at `hand_idx` onto its row.
///
/// Checks, in order: a card exists at `hand_idx`, its cost is affordable,
/// its row has room. On success the card leaves the hand, is appended to
/// the row and its cost is debited.
pub fn place_card(state: &mut MatchState, config: &RulesConfig, hand_idx: i32) -> Result<(), RuleError> {
    let side = state.active;
    let index = usize::try_from(hand_idx).map_err(|_| RuleError::NoCardAtPosition)?;

    let player = state.active_player();
    let card = player.hand.get(index).ok_or(RuleError::NoCardAtPosition)?;

    if !player.mana.can_afford(card.card.mana) {
        return Err(RuleError::NotEnoughMana);
    }

    let row = RowSlot::new(side, card.row_kind());
    if state.board.row(row).is_full(config.row_capacity) {
        return Err(RuleError::RowFull);
    }

    let player = &mut state.players[side];
    let minion = player.hand.remove(index);
    player.mana.spend(minion.card.mana);

    debug!("{side} placed {} into {:?} row", minion.card.name, row.kind);
    state.board.row_mut(row).push(minion);
    Ok(())
}
