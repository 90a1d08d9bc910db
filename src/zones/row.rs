//! Table rows.
//!
//! A row is an ordered sequence of minions. Capacity is enforced by the
//! placement rule, not by the row itself, so the storage keeps the standard
//! capacity inline and spills only for non-standard configs.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Minion;

/// Front or back row of a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowKind {
    Front,
    Back,
}

/// An ordered row of minions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    minions: SmallVec<[Minion; 5]>,
}

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.minions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.minions.is_empty()
    }

    /// Whether the row holds `capacity` or more minions.
    #[must_use]
    pub fn is_full(&self, capacity: usize) -> bool {
        self.minions.len() >= capacity
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Minion> {
        self.minions.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Minion> {
        self.minions.get_mut(index)
    }

    /// Append at the end of the row.
    pub fn push(&mut self, minion: Minion) {
        self.minions.push(minion);
    }

    /// Remove the minion at `index`, shifting later minions left.
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Minion {
        self.minions.remove(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Minion> {
        self.minions.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Minion> {
        self.minions.iter_mut()
    }

    pub fn as_mut_slice(&mut self) -> &mut [Minion] {
        &mut self.minions
    }

    /// Whether any minion in the row is a tank.
    #[must_use]
    pub fn has_tank(&self) -> bool {
        self.minions.iter().any(Minion::is_tank)
    }

    /// Index of the minion with the strictly greatest health. The first
    /// minion wins ties.
    #[must_use]
    pub fn healthiest(&self) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;
        for (index, minion) in self.minions.iter().enumerate() {
            let health = minion.card.health;
            if best.map_or(true, |(_, max)| health > max) {
                best = Some((index, health));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Clear frozen and attacked flags on every minion.
    pub fn reset_states(&mut self) {
        for minion in &mut self.minions {
            minion.card.reset_state();
        }
    }

    /// Clear only the attacked flag on every minion.
    pub fn reset_attacks(&mut self) {
        for minion in &mut self.minions {
            minion.card.attacked = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, MinionKind};

    fn minion(kind: MinionKind, health: i32) -> Minion {
        Minion::new(kind, &CardDefinition::minion(kind.name(), 1, health, 1))
    }

    #[test]
    fn test_push_and_remove_preserve_order() {
        let mut row = Row::new();
        row.push(minion(MinionKind::Sentinel, 1));
        row.push(minion(MinionKind::Berserker, 2));
        row.push(minion(MinionKind::Disciple, 3));

        let removed = row.remove(1);
        assert_eq!(removed.kind, MinionKind::Berserker);

        let kinds: Vec<_> = row.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, vec![MinionKind::Sentinel, MinionKind::Disciple]);
    }

    #[test]
    fn test_is_full() {
        let mut row = Row::new();
        for _ in 0..4 {
            row.push(minion(MinionKind::Sentinel, 1));
        }
        assert!(!row.is_full(5));

        row.push(minion(MinionKind::Sentinel, 1));
        assert!(row.is_full(5));
    }

    #[test]
    fn test_has_tank() {
        let mut row = Row::new();
        row.push(minion(MinionKind::Miraj, 1));
        assert!(!row.has_tank());

        row.push(minion(MinionKind::Warden, 1));
        assert!(row.has_tank());
    }

    #[test]
    fn test_healthiest_ties_and_empty() {
        let mut row = Row::new();
        assert_eq!(row.healthiest(), None);

        for health in [3, 5, 5, 2] {
            row.push(minion(MinionKind::Sentinel, health));
        }
        assert_eq!(row.healthiest(), Some(1));
    }

    #[test]
    fn test_resets() {
        let mut row = Row::new();
        row.push(minion(MinionKind::Sentinel, 1));
        row.push(minion(MinionKind::Sentinel, 1));
        for m in row.iter_mut() {
            m.card.attacked = true;
            m.card.frozen = true;
        }

        row.reset_attacks();
        assert!(row.iter().all(|m| !m.card.attacked && m.card.frozen));

        row.reset_states();
        assert!(row.iter().all(|m| m.card.can_act()));
    }
}
