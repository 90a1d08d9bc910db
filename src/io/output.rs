//! Batch output records.
//!
//! Each reported `ActionResult` renders to one JSON object. Which keys it
//! carries depends on the command and outcome:
//!
//! - queries: `command`, the queried `playerIdx` or `x`/`y`, and `output`
//! - rule errors: `command`, the offending fields and `error`
//! - a hero defeat: only `gameEnded`

use serde::Serialize;

use crate::cards::CardView;
use crate::core::{Action, Coordinates};
use crate::rules::{ActionResult, Outcome, RuleError};

/// One output record. Absent fields are omitted from the JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_idx: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand_idx: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_attacker: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_attacked: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_row: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_ended: Option<String>,
}

/// Payload of a query record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OutputValue {
    Cards(Vec<CardView>),
    Table([Vec<CardView>; 4]),
    Card(CardView),
    Number(i32),
    Message(&'static str),
}

impl OutputRecord {
    /// Render a single result.
    #[must_use]
    pub fn from_result(result: &ActionResult) -> Self {
        let action = &result.action;
        let output = match &result.outcome {
            Outcome::GameEnded(side) => {
                return Self {
                    game_ended: Some(format!("{side} killed the enemy hero.")),
                    ..Self::default()
                };
            }
            Outcome::Error(err) => return Self::rule_error(action, *err),
            Outcome::Cards(cards) => OutputValue::Cards(cards.clone()),
            Outcome::Table(rows) => OutputValue::Table(rows.clone()),
            Outcome::Card(card) => OutputValue::Card(card.clone()),
            Outcome::Number(value) => OutputValue::Number(*value),
            Outcome::Applied | Outcome::Ignored => return Self::command(action),
        };

        let mut record = Self::command(action);
        record.player_idx = action.player_idx();
        if let Action::GetCardAtPosition { position } = action {
            record.x = Some(position.x);
            record.y = Some(position.y);
        }
        record.output = Some(output);
        record
    }

    fn command(action: &Action) -> Self {
        Self {
            command: Some(action.command().name()),
            ..Self::default()
        }
    }

    fn rule_error(action: &Action, err: RuleError) -> Self {
        let mut record = Self::command(action);
        match *action {
            Action::PlaceCard { hand_idx } => record.hand_idx = Some(hand_idx),
            Action::CardUsesAttack { attacker, attacked } | Action::CardUsesAbility { attacker, attacked } => {
                record.card_attacker = Some(attacker);
                record.card_attacked = Some(attacked);
            }
            Action::UseAttackHero { attacker } => record.card_attacker = Some(attacker),
            Action::UseHeroAbility { affected_row } => record.affected_row = Some(affected_row),
            Action::GetCardAtPosition { position } => {
                // A miss is reported as the query's output, not as an error.
                record.x = Some(position.x);
                record.y = Some(position.y);
                record.output = Some(OutputValue::Message(err.message()));
                return record;
            }
            _ => {}
        }
        record.error = Some(err.message());
        record
    }
}

/// Render the reported results in order. `Applied` and `Ignored` outcomes
/// produce no record.
#[must_use]
pub fn render(results: &[ActionResult]) -> Vec<OutputRecord> {
    results
        .iter()
        .filter(|result| result.outcome.is_reported())
        .map(OutputRecord::from_result)
        .collect()
}
