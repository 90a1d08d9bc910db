//! End-to-end tests: JSON input through `run_batch` to rendered records.

use serde_json::{json, Value};

use minion_duel::core::{BatchContext, RulesConfig};
use minion_duel::io::{render, Input};
use minion_duel::rules::{Outcome, SetupError};
use minion_duel::run_batch;

fn card(name: &str, mana: i32, health: i32, attack: i32, color: &str) -> Value {
    json!({
        "mana": mana,
        "attackDamage": attack,
        "health": health,
        "description": "d",
        "colors": [color],
        "name": name,
    })
}

fn input(games: Value) -> Input {
    let berserkers = vec![card("Berserker", 1, 2, 15, "Red"); 3];
    let sentinels = vec![card("Sentinel", 1, 3, 1, "Green"); 3];
    let raw = json!({
        "playerOneDecks": { "nrCardsInDeck": 3, "nrDecks": 1, "decks": [berserkers] },
        "playerTwoDecks": { "nrCardsInDeck": 3, "nrDecks": 1, "decks": [sentinels] },
        "games": games,
    });
    serde_json::from_value(raw).unwrap()
}

fn start_game(seed: i64) -> Value {
    json!({
        "playerOneDeckIdx": 0,
        "playerTwoDeckIdx": 0,
        "shuffleSeed": seed,
        "playerOneHero": { "mana": 2, "description": "h", "colors": ["Blue"], "name": "Lord Royce" },
        "playerTwoHero": { "mana": 2, "description": "h", "colors": ["Blue"], "name": "Lord Royce" },
        "startingPlayer": 1,
    })
}

fn run(input: &Input, batch: &mut BatchContext) -> Value {
    let results = run_batch(input, &RulesConfig::default(), batch).unwrap();
    serde_json::to_value(render(&results)).unwrap()
}

/// Two matches: a hero kill in the first, tallies carried into the second.
#[test]
fn test_batch_end_to_end() {
    let berserker = json!({
        "mana": 1, "attackDamage": 15, "health": 2, "description": "d", "colors": ["Red"], "name": "Berserker",
    });
    let input = input(json!([
        {
            "startGame": start_game(5),
            "actions": [
                { "command": "getPlayerMana", "playerIdx": 1 },
                { "command": "placeCard", "handIdx": 3 },
                { "command": "placeCard", "handIdx": 0 },
                { "command": "getCardsOnTable" },
                { "command": "useAttackHero", "cardAttacker": { "x": 3, "y": 0 } },
                { "command": "getPlayerHero", "playerIdx": 2 },
                { "command": "useAttackHero", "cardAttacker": { "x": 3, "y": 0 } },
                { "command": "endPlayerTurn" },
                { "command": "getPlayerTurn" },
                { "command": "endPlayerTurn" },
                { "command": "getPlayerMana", "playerIdx": 1 },
                { "command": "getCardsInHand", "playerIdx": 1 },
                { "command": "useAttackHero", "cardAttacker": { "x": 3, "y": 0 } },
                { "command": "placeCard", "handIdx": 0 },
                { "command": "getPlayerOneWins" },
                { "command": "stealCard" },
            ],
        },
        {
            "startGame": start_game(9),
            "actions": [
                { "command": "getTotalGamesPlayed" },
                { "command": "getPlayerTwoWins" },
                { "command": "getCardAtPosition", "x": 2, "y": 0 },
            ],
        },
    ]));

    let mut batch = BatchContext::new();
    let output = run(&input, &mut batch);

    let expected = json!([
        { "command": "getPlayerMana", "playerIdx": 1, "output": 1 },
        { "command": "placeCard", "handIdx": 3, "error": "No card available at that position." },
        { "command": "getCardsOnTable", "output": [[], [], [], [berserker]] },
        {
            "command": "getPlayerHero",
            "playerIdx": 2,
            "output": { "mana": 2, "health": 15, "description": "h", "colors": ["Blue"], "name": "Lord Royce" },
        },
        {
            "command": "useAttackHero",
            "cardAttacker": { "x": 3, "y": 0 },
            "error": "Attacker card has already attacked this turn.",
        },
        { "command": "getPlayerTurn", "output": 2 },
        { "command": "getPlayerMana", "playerIdx": 1, "output": 2 },
        { "command": "getCardsInHand", "playerIdx": 1, "output": [berserker] },
        { "gameEnded": "Player one killed the enemy hero." },
        { "command": "getPlayerOneWins", "output": 1 },
        { "command": "getTotalGamesPlayed", "output": 1 },
        { "command": "getPlayerTwoWins", "output": 0 },
        { "command": "getCardAtPosition", "x": 2, "y": 0, "output": "No card available at that position." },
    ]);

    assert_eq!(output, expected);
    assert_eq!(batch.player_one_wins, 1);
    assert_eq!(batch.round, 1);
}

/// Attack errors echo both coordinates, hero ability errors the row.
#[test]
fn test_error_records() {
    let input = input(json!([{
        "startGame": start_game(3),
        "actions": [
            { "command": "placeCard", "handIdx": 0 },
            { "command": "cardUsesAttack", "cardAttacker": { "x": 3, "y": 0 }, "cardAttacked": { "x": 2, "y": 1 } },
            { "command": "useHeroAbility", "affectedRow": 0 },
        ],
    }]));

    let output = run(&input, &mut BatchContext::new());

    assert_eq!(
        output,
        json!([
            {
                "command": "cardUsesAttack",
                "cardAttacker": { "x": 3, "y": 0 },
                "cardAttacked": { "x": 2, "y": 1 },
                "error": "No card available at that position.",
            },
            { "command": "useHeroAbility", "affectedRow": 0, "error": "Not enough mana to use hero's ability." },
        ])
    );
}

/// Unknown card names abort the batch.
#[test]
fn test_unknown_card_fails_setup() {
    let mut input = input(json!([{ "startGame": start_game(1), "actions": [] }]));
    input.player_two_decks.decks[0][1].name = "Dragon".to_string();

    let result = run_batch(&input, &RulesConfig::default(), &mut BatchContext::new());

    assert_eq!(result, Err(SetupError::UnknownCard { name: "Dragon".to_string() }));
}

/// Every known action yields one result; only reported ones are rendered.
#[test]
fn test_one_result_per_action() {
    let input = input(json!([{
        "startGame": start_game(2),
        "actions": [
            { "command": "placeCard", "handIdx": 0 },
            { "command": "endPlayerTurn" },
            { "command": "stealCard" },
            { "command": "getPlayerTurn" },
            { "command": "getPlayerMana", "playerIdx": 0 },
        ],
    }]));

    let results = run_batch(&input, &RulesConfig::default(), &mut BatchContext::new()).unwrap();

    let outcomes: Vec<_> = results.iter().map(|result| result.outcome.clone()).collect();
    assert_eq!(
        outcomes,
        vec![Outcome::Applied, Outcome::Applied, Outcome::Number(2), Outcome::Number(1)]
    );
    assert_eq!(
        serde_json::to_value(render(&results)).unwrap(),
        json!([
            { "command": "getPlayerTurn", "output": 2 },
            { "command": "getPlayerMana", "playerIdx": 0, "output": 1 },
        ])
    );
}
