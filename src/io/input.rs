//! Batch input records.
//!
//! Field names follow the camelCase keys of the input files. Numeric fields
//! that a command does not use may be absent and default to 0.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::cards::CardDefinition;
use crate::core::{Action, Command, Coordinates, Side};

/// Card record as it appears in decks and hero slots.
pub type CardInput = CardDefinition;

/// A complete batch: both players' deck pools and the matches to run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub player_one_decks: DecksInput,
    pub player_two_decks: DecksInput,
    #[serde(default)]
    pub games: Vec<GameInput>,
}

impl Input {
    /// The deck pool of `side`.
    #[must_use]
    pub fn decks(&self, side: Side) -> &DecksInput {
        match side {
            Side::One => &self.player_one_decks,
            Side::Two => &self.player_two_decks,
        }
    }
}

/// One player's pool of template decks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecksInput {
    pub nr_cards_in_deck: i32,
    pub nr_decks: i32,
    pub decks: Vec<Vec<CardInput>>,
}

/// Setup and action list of one match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInput {
    pub start_game: StartGameInput,
    #[serde(default)]
    pub actions: Vec<ActionsInput>,
}

/// Match setup parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StartGameInput {
    pub player_one_deck_idx: i32,
    pub player_two_deck_idx: i32,
    pub shuffle_seed: i64,
    pub player_one_hero: CardInput,
    pub player_two_hero: CardInput,
    pub starting_player: i32,
}

impl StartGameInput {
    #[must_use]
    pub fn deck_idx(&self, side: Side) -> i32 {
        match side {
            Side::One => self.player_one_deck_idx,
            Side::Two => self.player_two_deck_idx,
        }
    }

    #[must_use]
    pub fn hero(&self, side: Side) -> &CardInput {
        match side {
            Side::One => &self.player_one_hero,
            Side::Two => &self.player_two_hero,
        }
    }
}

/// A raw action record: a command name plus every field any command uses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionsInput {
    pub command: String,
    pub hand_idx: i32,
    pub card_attacker: Option<Coordinates>,
    pub card_attacked: Option<Coordinates>,
    pub affected_row: i32,
    pub player_idx: i32,
    pub x: i32,
    pub y: i32,
}

impl ActionsInput {
    /// Convert into a typed action. Unknown command names give `None`.
    #[must_use]
    pub fn to_action(&self) -> Option<Action> {
        let Some(command) = Command::from_name(&self.command) else {
            warn!("ignoring unknown command {:?}", self.command);
            return None;
        };

        let player_idx = self.player_idx;
        let attacker = self.card_attacker.unwrap_or_default();
        let attacked = self.card_attacked.unwrap_or_default();

        let action = match command {
            Command::EndPlayerTurn => Action::EndPlayerTurn,
            Command::PlaceCard => Action::PlaceCard { hand_idx: self.hand_idx },
            Command::CardUsesAttack => Action::CardUsesAttack { attacker, attacked },
            Command::CardUsesAbility => Action::CardUsesAbility { attacker, attacked },
            Command::UseAttackHero => Action::UseAttackHero { attacker },
            Command::UseHeroAbility => Action::UseHeroAbility {
                affected_row: self.affected_row,
            },
            Command::GetCardsInHand => Action::GetCardsInHand { player_idx },
            Command::GetPlayerDeck => Action::GetPlayerDeck { player_idx },
            Command::GetCardsOnTable => Action::GetCardsOnTable,
            Command::GetPlayerTurn => Action::GetPlayerTurn,
            Command::GetPlayerHero => Action::GetPlayerHero { player_idx },
            Command::GetCardAtPosition => Action::GetCardAtPosition {
                position: Coordinates::new(self.x, self.y),
            },
            Command::GetPlayerMana => Action::GetPlayerMana { player_idx },
            Command::GetFrozenCardsOnTable => Action::GetFrozenCardsOnTable,
            Command::GetTotalGamesPlayed => Action::GetTotalGamesPlayed,
            Command::GetPlayerOneWins => Action::GetPlayerOneWins,
            Command::GetPlayerTwoWins => Action::GetPlayerTwoWins,
        };
        Some(action)
    }
}
