//! The duel: rules object, builder and match setup.

use im::Vector;
use log::{debug, info, warn};

use super::commands::CommandTable;
use crate::cards::{CardDefinition, CardRegistry, Minion};
use crate::core::{
    Action, BatchContext, GameRng, ManaLedger, MatchState, PlayerMap, PlayerState, RulesConfig, Side,
};
use crate::rules::{GameResult, Outcome, RulesEngine, SetupError};
use crate::zones::DeckManager;

/// Everything needed to start one match.
#[derive(Clone, Debug)]
pub struct MatchSetup<'a> {
    /// Each player's template decks.
    pub decks: PlayerMap<&'a [Vec<CardDefinition>]>,
    /// Which template each player selects.
    pub deck_idx: PlayerMap<i32>,
    pub heroes: PlayerMap<&'a CardDefinition>,
    pub shuffle_seed: i64,
    pub starting_player: Side,
}

/// Two-player duel rules.
#[derive(Clone, Debug)]
pub struct Duel {
    config: RulesConfig,
    registry: CardRegistry,
    commands: CommandTable,
}

/// Builder for creating a Duel.
///
/// ```
/// use minion_duel::games::duel::DuelBuilder;
/// use minion_duel::RulesEngine;
///
/// let duel = DuelBuilder::new().row_capacity(3).hero_health(10).build();
/// assert_eq!(duel.config().row_capacity, 3);
/// assert_eq!(duel.config().hero_health, 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DuelBuilder {
    config: RulesConfig,
}

impl DuelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole rules configuration.
    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    pub fn row_capacity(mut self, capacity: usize) -> Self {
        self.config = self.config.with_row_capacity(capacity);
        self
    }

    pub fn hero_health(mut self, health: i32) -> Self {
        self.config = self.config.with_hero_health(health);
        self
    }

    pub fn starting_mana(mut self, mana: i32, step: i32) -> Self {
        self.config = self.config.with_starting_mana(mana, step);
        self
    }

    pub fn build(self) -> Duel {
        Duel {
            config: self.config,
            registry: CardRegistry::standard(),
            commands: CommandTable::standard(),
        }
    }
}

impl Default for Duel {
    fn default() -> Self {
        DuelBuilder::new().build()
    }
}

impl Duel {
    /// Get the card registry.
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// Set up a match.
    ///
    /// For each player: build the template decks, copy the selected one
    /// (falling back to deck 0 when the index is out of range), shuffle it
    /// with a generator seeded by the match seed, draw one card, build the
    /// hero and start mana at the configured values.
    pub fn start_match(&self, setup: &MatchSetup<'_>) -> Result<MatchState, SetupError> {
        let one = self.setup_player(setup, Side::One)?;
        let two = self.setup_player(setup, Side::Two)?;

        info!(
            "match started: seed {}, {} vs {}, {} to act",
            setup.shuffle_seed, one.hero.kind, two.hero.kind, setup.starting_player
        );
        Ok(MatchState::new(PlayerMap::from_pair(one, two), setup.starting_player))
    }

    fn setup_player(&self, setup: &MatchSetup<'_>, side: Side) -> Result<PlayerState, SetupError> {
        let templates = setup.decks[side]
            .iter()
            .map(|deck| {
                deck.iter()
                    .map(|card| self.registry.minion(card))
                    .collect::<Result<Vector<Minion>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut deck = DeckManager::new(templates);
        deck.select(setup.deck_idx[side])
            .ok_or(SetupError::NoDecks { player: side.number() })?;
        deck.shuffle(&mut GameRng::from_match_seed(setup.shuffle_seed));

        let hero = self.registry.hero(setup.heroes[side], &self.config)?;
        let mut player = PlayerState::new(deck, hero, ManaLedger::new(&self.config));
        player.draw_card();
        Ok(player)
    }
}

impl RulesEngine for Duel {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn apply_action(&self, state: &mut MatchState, batch: &mut BatchContext, action: &Action) -> Outcome {
        let command = action.command();

        if state.is_over() && !command.is_query() {
            warn!("ignoring {command}: the match is already over");
            return Outcome::Ignored;
        }

        let outcome = self.commands.dispatch(self, state, batch, action);
        match &outcome {
            Outcome::Error(err) => debug!("{command} rejected: {err}"),
            _ if !command.is_query() => debug!("{command} applied"),
            _ => {}
        }
        outcome
    }

    fn is_terminal(&self, state: &MatchState) -> Option<GameResult> {
        state.winner.map(GameResult::Winner)
    }
}
