//! Command dispatch table.
//!
//! Every `Command` maps to one handler. The table is built once per `Duel`
//! and is total: `CommandTable::standard` registers all seventeen commands.

use rustc_hash::FxHashMap;

use super::game::Duel;
use crate::cards::Minion;
use crate::core::{Action, BatchContext, Command, MatchState};
use crate::rules::{self, Outcome, RuleError, RulesEngine};
use crate::zones::{RowSlot, Slot};

/// Signature shared by all command handlers.
pub type Handler = fn(&Duel, &mut MatchState, &mut BatchContext, &Action) -> Outcome;

/// Lookup from command to handler.
#[derive(Clone)]
pub struct CommandTable {
    handlers: FxHashMap<Command, Handler>,
}

impl std::fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CommandTable {
    /// The table with a handler for every command.
    #[must_use]
    pub fn standard() -> Self {
        let entries: [(Command, Handler); 17] = [
            (Command::EndPlayerTurn, end_player_turn),
            (Command::PlaceCard, place_card),
            (Command::CardUsesAttack, card_uses_attack),
            (Command::CardUsesAbility, card_uses_ability),
            (Command::UseAttackHero, use_attack_hero),
            (Command::UseHeroAbility, use_hero_ability),
            (Command::GetCardsInHand, get_cards_in_hand),
            (Command::GetPlayerDeck, get_player_deck),
            (Command::GetCardsOnTable, get_cards_on_table),
            (Command::GetPlayerTurn, get_player_turn),
            (Command::GetPlayerHero, get_player_hero),
            (Command::GetCardAtPosition, get_card_at_position),
            (Command::GetPlayerMana, get_player_mana),
            (Command::GetFrozenCardsOnTable, get_frozen_cards_on_table),
            (Command::GetTotalGamesPlayed, get_total_games_played),
            (Command::GetPlayerOneWins, get_player_one_wins),
            (Command::GetPlayerTwoWins, get_player_two_wins),
        ];

        Self {
            handlers: entries.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn get(&self, command: Command) -> Option<Handler> {
        self.handlers.get(&command).copied()
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the handler registered for `action`'s command.
    pub fn dispatch(
        &self,
        duel: &Duel,
        state: &mut MatchState,
        batch: &mut BatchContext,
        action: &Action,
    ) -> Outcome {
        match self.get(action.command()) {
            Some(handler) => handler(duel, state, batch, action),
            None => Outcome::Ignored,
        }
    }
}

// === Mutating commands ===

fn end_player_turn(duel: &Duel, state: &mut MatchState, batch: &mut BatchContext, _: &Action) -> Outcome {
    rules::end_turn(state, duel.config(), batch);
    Outcome::Applied
}

fn place_card(duel: &Duel, state: &mut MatchState, _: &mut BatchContext, action: &Action) -> Outcome {
    let Action::PlaceCard { hand_idx } = *action else {
        return Outcome::Ignored;
    };
    rules::place_card(state, duel.config(), hand_idx).into()
}

fn card_uses_attack(_: &Duel, state: &mut MatchState, _: &mut BatchContext, action: &Action) -> Outcome {
    let Action::CardUsesAttack { attacker, attacked } = *action else {
        return Outcome::Ignored;
    };
    rules::attack_minion(state, attacker, attacked).into()
}

fn card_uses_ability(duel: &Duel, state: &mut MatchState, _: &mut BatchContext, action: &Action) -> Outcome {
    let Action::CardUsesAbility { attacker, attacked } = *action else {
        return Outcome::Ignored;
    };
    rules::use_minion_ability(state, duel.config(), attacker, attacked).into()
}

fn use_attack_hero(_: &Duel, state: &mut MatchState, batch: &mut BatchContext, action: &Action) -> Outcome {
    let Action::UseAttackHero { attacker } = *action else {
        return Outcome::Ignored;
    };
    match rules::attack_hero(state, attacker) {
        Ok(Some(winner)) => {
            batch.record_win(winner);
            Outcome::GameEnded(winner)
        }
        Ok(None) => Outcome::Applied,
        Err(err) => Outcome::Error(err),
    }
}

fn use_hero_ability(duel: &Duel, state: &mut MatchState, _: &mut BatchContext, action: &Action) -> Outcome {
    let Action::UseHeroAbility { affected_row } = *action else {
        return Outcome::Ignored;
    };
    rules::use_hero_ability(state, duel.config(), affected_row).into()
}

// === Queries ===

fn get_cards_in_hand(_: &Duel, state: &mut MatchState, _: &mut BatchContext, action: &Action) -> Outcome {
    match action.queried_player() {
        Some(side) => Outcome::Cards(state.player(side).hand.iter().map(Minion::view).collect()),
        None => Outcome::Ignored,
    }
}

fn get_player_deck(_: &Duel, state: &mut MatchState, _: &mut BatchContext, action: &Action) -> Outcome {
    match action.queried_player() {
        Some(side) => Outcome::Cards(state.player(side).deck.current().iter().map(Minion::view).collect()),
        None => Outcome::Ignored,
    }
}

fn get_cards_on_table(_: &Duel, state: &mut MatchState, _: &mut BatchContext, _: &Action) -> Outcome {
    let board = &state.board;
    Outcome::Table(RowSlot::TABLE_ORDER.map(|slot| board.row(slot).iter().map(Minion::view).collect()))
}

fn get_player_turn(_: &Duel, state: &mut MatchState, _: &mut BatchContext, _: &Action) -> Outcome {
    Outcome::Number(state.active.number())
}

fn get_player_hero(_: &Duel, state: &mut MatchState, _: &mut BatchContext, action: &Action) -> Outcome {
    match action.queried_player() {
        Some(side) => Outcome::Card(state.player(side).hero.view()),
        None => Outcome::Ignored,
    }
}

fn get_card_at_position(_: &Duel, state: &mut MatchState, _: &mut BatchContext, action: &Action) -> Outcome {
    let Action::GetCardAtPosition { position } = *action else {
        return Outcome::Ignored;
    };
    Slot::from_coordinates(position)
        .and_then(|slot| state.board.minion(slot))
        .map_or(Outcome::Error(RuleError::NoCardAtPosition), |minion| {
            Outcome::Card(minion.view())
        })
}

fn get_player_mana(_: &Duel, state: &mut MatchState, _: &mut BatchContext, action: &Action) -> Outcome {
    match action.queried_player() {
        Some(side) => Outcome::Number(state.player(side).mana.balance()),
        None => Outcome::Ignored,
    }
}

fn get_frozen_cards_on_table(_: &Duel, state: &mut MatchState, _: &mut BatchContext, _: &Action) -> Outcome {
    let frozen = state
        .board
        .rows()
        .flat_map(|row| row.iter())
        .filter(|minion| minion.card.frozen)
        .map(Minion::view)
        .collect();
    Outcome::Cards(frozen)
}

fn get_total_games_played(_: &Duel, _: &mut MatchState, batch: &mut BatchContext, _: &Action) -> Outcome {
    Outcome::Number(batch.total_games())
}

fn get_player_one_wins(_: &Duel, _: &mut MatchState, batch: &mut BatchContext, _: &Action) -> Outcome {
    Outcome::Number(batch.player_one_wins)
}

fn get_player_two_wins(_: &Duel, _: &mut MatchState, batch: &mut BatchContext, _: &Action) -> Outcome {
    Outcome::Number(batch.player_two_wins)
}
