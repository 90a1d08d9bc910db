//! Per-player mana balance with a capped growth curve.

use serde::{Deserialize, Serialize};

use super::config::RulesConfig;

/// A player's mana balance and its per-round growth step.
///
/// Each round the step grows by one until it reaches the configured cap,
/// then the step is added to the balance. The balance only decreases by
/// explicit spending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaLedger {
    balance: i32,
    step: i32,
}

impl ManaLedger {
    /// A ledger at the configured starting balance and step.
    #[must_use]
    pub fn new(config: &RulesConfig) -> Self {
        Self {
            balance: config.starting_mana,
            step: config.starting_mana_step,
        }
    }

    /// Current balance.
    #[must_use]
    pub fn balance(&self) -> i32 {
        self.balance
    }

    /// Current growth step.
    #[must_use]
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Whether `cost` can be paid from the current balance.
    #[must_use]
    pub fn can_afford(&self, cost: i32) -> bool {
        cost <= self.balance
    }

    /// Round transition: raise the step (up to `max_step`) and add it.
    pub fn grow(&mut self, max_step: i32) {
        if self.step < max_step {
            self.step += 1;
        }
        self.balance += self.step;
    }

    /// Debit `amount`. Callers check `can_afford` first.
    pub fn spend(&mut self, amount: i32) {
        debug_assert!(self.can_afford(amount), "mana spent without a legality check");
        self.balance -= amount;
    }

    /// Return to the starting balance and step.
    pub fn reset(&mut self, config: &RulesConfig) {
        *self = Self::new(config);
    }
}
