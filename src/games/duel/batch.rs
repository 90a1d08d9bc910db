//! Running every match of an input file.

use log::info;

use super::game::{DuelBuilder, MatchSetup};
use crate::core::{BatchContext, PlayerMap, RulesConfig, Side};
use crate::io::{GameInput, Input};
use crate::rules::{ActionResult, RulesEngine, SetupError};

/// Run all matches of `input` in order.
///
/// Matches share `batch`, so win tallies and the round counter carry over
/// from one match to the next. Every known action yields one result, in
/// input order; unknown commands are skipped. A setup error
/// aborts the whole batch.
pub fn run_batch(
    input: &Input,
    config: &RulesConfig,
    batch: &mut BatchContext,
) -> Result<Vec<ActionResult>, SetupError> {
    let duel = DuelBuilder::new().config(config.clone()).build();
    let mut results = Vec::new();

    for (index, game) in input.games.iter().enumerate() {
        let mut state = duel.start_match(&match_setup(input, game))?;
        let actions: Vec<_> = game.actions.iter().filter_map(|raw| raw.to_action()).collect();

        results.extend(duel.apply_all(&mut state, batch, &actions));

        match duel.is_terminal(&state) {
            Some(result) => info!("match {index} finished: {result:?}"),
            None => info!("match {index} ran out of actions"),
        }
    }

    Ok(results)
}

fn match_setup<'a>(input: &'a Input, game: &'a GameInput) -> MatchSetup<'a> {
    let start = &game.start_game;
    MatchSetup {
        decks: PlayerMap::new(|side| input.decks(side).decks.as_slice()),
        deck_idx: PlayerMap::new(|side| start.deck_idx(side)),
        heroes: PlayerMap::new(|side| start.hero(side)),
        shuffle_seed: start.shuffle_seed,
        starting_player: Side::from_player_idx(start.starting_player),
    }
}
