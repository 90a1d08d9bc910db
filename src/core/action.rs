//! Action representation: a command plus its command-specific fields.
//!
//! Input records carry a command name and a loose bag of fields. They are
//! converted into `Action`, whose variants hold exactly the fields each
//! command uses. `Command` is the field-less discriminant used as the key of
//! the dispatch table.

use serde::{Deserialize, Serialize};

use super::player::Side;

/// Every command a match understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    EndPlayerTurn,
    PlaceCard,
    CardUsesAttack,
    CardUsesAbility,
    UseAttackHero,
    UseHeroAbility,
    GetCardsInHand,
    GetPlayerDeck,
    GetCardsOnTable,
    GetPlayerTurn,
    GetPlayerHero,
    GetCardAtPosition,
    GetPlayerMana,
    GetFrozenCardsOnTable,
    GetTotalGamesPlayed,
    GetPlayerOneWins,
    GetPlayerTwoWins,
}

impl Command {
    /// All commands, mutating ones first.
    pub const ALL: [Command; 17] = [
        Command::EndPlayerTurn,
        Command::PlaceCard,
        Command::CardUsesAttack,
        Command::CardUsesAbility,
        Command::UseAttackHero,
        Command::UseHeroAbility,
        Command::GetCardsInHand,
        Command::GetPlayerDeck,
        Command::GetCardsOnTable,
        Command::GetPlayerTurn,
        Command::GetPlayerHero,
        Command::GetCardAtPosition,
        Command::GetPlayerMana,
        Command::GetFrozenCardsOnTable,
        Command::GetTotalGamesPlayed,
        Command::GetPlayerOneWins,
        Command::GetPlayerTwoWins,
    ];

    /// The wire name of this command.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Command::EndPlayerTurn => "endPlayerTurn",
            Command::PlaceCard => "placeCard",
            Command::CardUsesAttack => "cardUsesAttack",
            Command::CardUsesAbility => "cardUsesAbility",
            Command::UseAttackHero => "useAttackHero",
            Command::UseHeroAbility => "useHeroAbility",
            Command::GetCardsInHand => "getCardsInHand",
            Command::GetPlayerDeck => "getPlayerDeck",
            Command::GetCardsOnTable => "getCardsOnTable",
            Command::GetPlayerTurn => "getPlayerTurn",
            Command::GetPlayerHero => "getPlayerHero",
            Command::GetCardAtPosition => "getCardAtPosition",
            Command::GetPlayerMana => "getPlayerMana",
            Command::GetFrozenCardsOnTable => "getFrozenCardsOnTable",
            Command::GetTotalGamesPlayed => "getTotalGamesPlayed",
            Command::GetPlayerOneWins => "getPlayerOneWins",
            Command::GetPlayerTwoWins => "getPlayerTwoWins",
        }
    }

    /// Look up a command by its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Command> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Queries never change match state.
    #[must_use]
    pub const fn is_query(self) -> bool {
        !matches!(
            self,
            Command::EndPlayerTurn
                | Command::PlaceCard
                | Command::CardUsesAttack
                | Command::CardUsesAbility
                | Command::UseAttackHero
                | Command::UseHeroAbility
        )
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A table coordinate: `x` is the row index (0..=3), `y` the position in it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A complete, typed action.
///
/// Per-player queries keep the raw `playerIdx` of the input so it can be
/// echoed back; `queried_player` resolves it to a side.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    EndPlayerTurn,
    PlaceCard { hand_idx: i32 },
    CardUsesAttack { attacker: Coordinates, attacked: Coordinates },
    CardUsesAbility { attacker: Coordinates, attacked: Coordinates },
    UseAttackHero { attacker: Coordinates },
    UseHeroAbility { affected_row: i32 },
    GetCardsInHand { player_idx: i32 },
    GetPlayerDeck { player_idx: i32 },
    GetCardsOnTable,
    GetPlayerTurn,
    GetPlayerHero { player_idx: i32 },
    GetCardAtPosition { position: Coordinates },
    GetPlayerMana { player_idx: i32 },
    GetFrozenCardsOnTable,
    GetTotalGamesPlayed,
    GetPlayerOneWins,
    GetPlayerTwoWins,
}

impl Action {
    /// The command this action invokes.
    #[must_use]
    pub const fn command(&self) -> Command {
        match self {
            Action::EndPlayerTurn => Command::EndPlayerTurn,
            Action::PlaceCard { .. } => Command::PlaceCard,
            Action::CardUsesAttack { .. } => Command::CardUsesAttack,
            Action::CardUsesAbility { .. } => Command::CardUsesAbility,
            Action::UseAttackHero { .. } => Command::UseAttackHero,
            Action::UseHeroAbility { .. } => Command::UseHeroAbility,
            Action::GetCardsInHand { .. } => Command::GetCardsInHand,
            Action::GetPlayerDeck { .. } => Command::GetPlayerDeck,
            Action::GetCardsOnTable => Command::GetCardsOnTable,
            Action::GetPlayerTurn => Command::GetPlayerTurn,
            Action::GetPlayerHero { .. } => Command::GetPlayerHero,
            Action::GetCardAtPosition { .. } => Command::GetCardAtPosition,
            Action::GetPlayerMana { .. } => Command::GetPlayerMana,
            Action::GetFrozenCardsOnTable => Command::GetFrozenCardsOnTable,
            Action::GetTotalGamesPlayed => Command::GetTotalGamesPlayed,
            Action::GetPlayerOneWins => Command::GetPlayerOneWins,
            Action::GetPlayerTwoWins => Command::GetPlayerTwoWins,
        }
    }

    /// The raw `playerIdx` of a per-player query.
    #[must_use]
    pub const fn player_idx(&self) -> Option<i32> {
        match self {
            Action::GetCardsInHand { player_idx }
            | Action::GetPlayerDeck { player_idx }
            | Action::GetPlayerHero { player_idx }
            | Action::GetPlayerMana { player_idx } => Some(*player_idx),
            _ => None,
        }
    }

    /// The player a per-player query addresses, if any.
    #[must_use]
    pub const fn queried_player(&self) -> Option<Side> {
        match self.player_idx() {
            Some(idx) => Some(Side::from_player_idx(idx)),
            None => None,
        }
    }
}
