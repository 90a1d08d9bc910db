//! Integration tests for placement, turn and round transitions, and queries.

use minion_duel::core::{Action, BatchContext, MatchState, PlayerMap, RulesConfig, Side};
use minion_duel::rules::{end_turn, place_card, Outcome, RuleError, RulesEngine};
use minion_duel::zones::{RowKind, RowSlot};
use minion_duel::{CardDefinition, Duel, MatchSetup, Minion, MinionKind};

fn start(duel: &Duel, deck: &[CardDefinition]) -> MatchState {
    let decks = vec![deck.to_vec()];
    let royce = CardDefinition::hero("Lord Royce", 2);
    let thorina = CardDefinition::hero("Empress Thorina", 2);
    let setup = MatchSetup {
        decks: PlayerMap::with_value(decks.as_slice()),
        deck_idx: PlayerMap::with_value(0),
        heroes: PlayerMap::from_pair(&royce, &thorina),
        shuffle_seed: 7,
        starting_player: Side::One,
    };
    duel.start_match(&setup).unwrap()
}

fn sentinels(count: usize, mana: i32) -> Vec<CardDefinition> {
    vec![CardDefinition::minion("Sentinel", mana, 3, 2); count]
}

/// The round only advances once both players have ended their turn.
#[test]
fn test_round_needs_both_players() {
    let duel = Duel::default();
    let config = RulesConfig::default();
    let mut batch = BatchContext::new();
    let mut state = start(&duel, &sentinels(5, 1));

    for (_, player) in state.players.iter() {
        assert_eq!(player.hand.len(), 1);
        assert_eq!(player.deck.len(), 4);
    }

    assert!(!end_turn(&mut state, &config, &mut batch));
    assert_eq!(state.active, Side::Two);
    assert!(state.player(Side::One).turn_ended);
    assert_eq!(state.player(Side::One).mana.balance(), 1);
    assert_eq!(batch.round, 0);

    assert!(end_turn(&mut state, &config, &mut batch));
    assert_eq!(state.active, Side::One);
    assert_eq!(batch.round, 1);
    for (_, player) in state.players.iter() {
        assert!(!player.turn_ended);
        assert_eq!(player.mana.balance(), 3);
        assert_eq!(player.hand.len(), 2);
        assert_eq!(player.deck.len(), 3);
    }
}

/// Mana growth stops increasing its step at the cap.
#[test]
fn test_mana_step_capped() {
    let duel = Duel::default();
    let config = RulesConfig::default();
    let mut batch = BatchContext::new();
    let mut state = start(&duel, &sentinels(3, 1));

    for _ in 0..22 {
        end_turn(&mut state, &config, &mut batch);
    }

    assert_eq!(batch.round, 11);
    for (_, player) in state.players.iter() {
        assert_eq!(player.mana.step(), 10);
        assert_eq!(player.mana.balance(), 1 + 54 + 20);
        // Drawing from an empty deck does nothing.
        assert_eq!(player.hand.len(), 3);
        assert!(player.deck.is_empty());
    }
}

/// Ending a turn clears flags on the ender's side only.
#[test]
fn test_end_turn_resets_own_side() {
    let duel = Duel::default();
    let config = RulesConfig::default();
    let mut batch = BatchContext::new();
    let mut state = start(&duel, &sentinels(3, 1));

    let definition = CardDefinition::minion("Sentinel", 1, 3, 2);
    for side in Side::BOTH {
        let mut minion = Minion::new(MinionKind::Sentinel, &definition);
        minion.card.frozen = true;
        minion.card.attacked = true;
        state.board.row_mut(RowSlot::new(side, RowKind::Back)).push(minion);
    }
    state.player_mut(Side::One).hero.card.attacked = true;

    end_turn(&mut state, &config, &mut batch);

    let own = state.board.row(RowSlot::new(Side::One, RowKind::Back)).get(0).unwrap();
    assert!(own.card.can_act());
    assert!(!state.player(Side::One).hero.card.attacked);
    let enemy = state.board.row(RowSlot::new(Side::Two, RowKind::Back)).get(0).unwrap();
    assert!(enemy.card.frozen);
    assert!(enemy.card.attacked);

    end_turn(&mut state, &config, &mut batch);

    let enemy = state.board.row(RowSlot::new(Side::Two, RowKind::Back)).get(0).unwrap();
    assert!(enemy.card.can_act());
}

/// Placing a card moves it from hand to its row and debits its cost.
#[test]
fn test_place_card() {
    let duel = Duel::default();
    let mut batch = BatchContext::new();
    let mut state = start(&duel, &sentinels(3, 1));

    let outcome = duel.apply_action(&mut state, &mut batch, &Action::PlaceCard { hand_idx: 0 });

    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(state.player(Side::One).mana.balance(), 0);
    assert!(state.player(Side::One).hand.is_empty());
    assert_eq!(state.board.row(RowSlot::new(Side::One, RowKind::Back)).len(), 1);

    let again = duel.apply_action(&mut state, &mut batch, &Action::PlaceCard { hand_idx: 0 });
    assert_eq!(again, Outcome::Error(RuleError::NoCardAtPosition));
}

/// Placement checks the hand index, then mana, then row space.
#[test]
fn test_place_card_checks() {
    let config = RulesConfig::default();
    let duel = Duel::default();
    let mut state = start(&duel, &sentinels(3, 4));

    assert_eq!(place_card(&mut state, &config, -1), Err(RuleError::NoCardAtPosition));
    assert_eq!(place_card(&mut state, &config, 0), Err(RuleError::NotEnoughMana));

    state.player_mut(Side::One).mana.grow(config.max_mana_step);
    state.player_mut(Side::One).mana.grow(config.max_mana_step);
    let row = RowSlot::new(Side::One, RowKind::Back);
    let filler = Minion::new(MinionKind::Berserker, &CardDefinition::minion("Berserker", 1, 1, 1));
    for _ in 0..config.row_capacity {
        state.board.row_mut(row).push(filler.clone());
    }

    assert_eq!(place_card(&mut state, &config, 0), Err(RuleError::RowFull));
    assert_eq!(state.player(Side::One).hand.len(), 1);
    assert_eq!(state.player(Side::One).mana.balance(), 6);
}

/// Queries report state and never change it.
#[test]
fn test_queries_are_pure() {
    let duel = Duel::default();
    let mut batch = BatchContext::new();
    let mut state = start(&duel, &sentinels(3, 1));
    duel.apply_action(&mut state, &mut batch, &Action::PlaceCard { hand_idx: 0 });

    let queries = [
        Action::GetCardsOnTable,
        Action::GetPlayerTurn,
        Action::GetCardsInHand { player_idx: 2 },
        Action::GetPlayerDeck { player_idx: 1 },
        Action::GetPlayerMana { player_idx: 2 },
        Action::GetFrozenCardsOnTable,
    ];
    let before = state.board.clone();

    for query in &queries {
        let first = duel.apply_action(&mut state, &mut batch, query);
        let second = duel.apply_action(&mut state, &mut batch, query);
        assert_eq!(first, second);
    }
    assert_eq!(state.board, before);

    assert_eq!(duel.apply_action(&mut state, &mut batch, &Action::GetPlayerTurn), Outcome::Number(1));
    duel.apply_action(&mut state, &mut batch, &Action::EndPlayerTurn);
    assert_eq!(duel.apply_action(&mut state, &mut batch, &Action::GetPlayerTurn), Outcome::Number(2));
}

/// The table query lists rows in table order.
#[test]
fn test_cards_on_table_order() {
    let duel = Duel::default();
    let mut batch = BatchContext::new();
    let mut state = start(&duel, &sentinels(3, 1));
    duel.apply_action(&mut state, &mut batch, &Action::PlaceCard { hand_idx: 0 });
    duel.apply_action(&mut state, &mut batch, &Action::EndPlayerTurn);
    duel.apply_action(&mut state, &mut batch, &Action::PlaceCard { hand_idx: 0 });

    let Outcome::Table(rows) = duel.apply_action(&mut state, &mut batch, &Action::GetCardsOnTable) else {
        panic!("expected the table");
    };
    let sizes: Vec<_> = rows.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![1, 0, 0, 1]);
    assert_eq!(rows[3][0].attack_damage, Some(2));
}
