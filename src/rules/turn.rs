//! Turn and round transitions.
//!
//! A round ends once both players have ended their turn. The round
//! transition grows both mana ledgers, draws one card per player and clears
//! every attacked flag on the table.

use log::{debug, info};

use crate::core::{BatchContext, MatchState, RulesConfig, Side};

/// End the active player's turn and hand control to the opponent.
///
/// Returns `true` if this also completed a round.
pub fn end_turn(state: &mut MatchState, config: &RulesConfig, batch: &mut BatchContext) -> bool {
    let side = state.active;

    for row in state.board.rows_of_mut(side) {
        row.reset_states();
    }
    let player = &mut state.players[side];
    player.hero.card.attacked = false;
    player.turn_ended = true;

    let round_over = state.players.iter().all(|(_, player)| player.turn_ended);
    if round_over {
        batch.round += 1;
        start_round(state, config);
        info!("round {} started", batch.round);
    }

    state.active = side.opponent();
    debug!("{side} ended the turn, {} to act", state.active);
    round_over
}

/// Round transition for both players.
fn start_round(state: &mut MatchState, config: &RulesConfig) {
    for (_, player) in state.players.iter_mut() {
        player.turn_ended = false;
        player.mana.grow(config.max_mana_step);
        player.draw_card();
    }
    for side in Side::BOTH {
        for row in state.board.rows_of_mut(side) {
            row.reset_attacks();
        }
    }
}
