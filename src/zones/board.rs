//! The table: four rows addressed by `(Side, RowKind)`.
//!
//! ## Table Order
//!
//! Input coordinates number the rows 0..=3 from player two's back row to
//! player one's back row:
//!
//! | index | side | row   |
//! |-------|------|-------|
//! | 0     | Two  | Back  |
//! | 1     | Two  | Front |
//! | 2     | One  | Front |
//! | 3     | One  | Back  |
//!
//! `RowSlot::from_table_index` is the only place this numbering is decoded.

use serde::{Deserialize, Serialize};

use super::row::{Row, RowKind};
use crate::cards::{AbilityTargets, Minion};
use crate::core::{Coordinates, Side};

/// A row of a specific player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowSlot {
    pub side: Side,
    pub kind: RowKind,
}

impl RowSlot {
    /// All rows in table order.
    pub const TABLE_ORDER: [RowSlot; 4] = [
        RowSlot::new(Side::Two, RowKind::Back),
        RowSlot::new(Side::Two, RowKind::Front),
        RowSlot::new(Side::One, RowKind::Front),
        RowSlot::new(Side::One, RowKind::Back),
    ];

    #[must_use]
    pub const fn new(side: Side, kind: RowKind) -> Self {
        Self { side, kind }
    }

    /// Decode a table row index, `None` outside 0..=3.
    #[must_use]
    pub fn from_table_index(index: i32) -> Option<RowSlot> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::TABLE_ORDER.get(i).copied())
    }

    /// Position of this row in table order.
    #[must_use]
    pub const fn table_index(self) -> usize {
        match (self.side, self.kind) {
            (Side::Two, RowKind::Back) => 0,
            (Side::Two, RowKind::Front) => 1,
            (Side::One, RowKind::Front) => 2,
            (Side::One, RowKind::Back) => 3,
        }
    }
}

/// A minion's place on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub row: RowSlot,
    pub index: usize,
}

impl Slot {
    #[must_use]
    pub const fn new(row: RowSlot, index: usize) -> Self {
        Self { row, index }
    }

    /// Decode input coordinates. Does not check that a minion is there.
    #[must_use]
    pub fn from_coordinates(coordinates: Coordinates) -> Option<Slot> {
        let row = RowSlot::from_table_index(coordinates.x)?;
        let index = usize::try_from(coordinates.y).ok()?;
        Some(Slot { row, index })
    }

    /// The player owning this slot's row.
    #[must_use]
    pub const fn side(self) -> Side {
        self.row.side
    }
}

/// All four rows of a match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: [Row; 4],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn row(&self, slot: RowSlot) -> &Row {
        &self.rows[slot.table_index()]
    }

    pub fn row_mut(&mut self, slot: RowSlot) -> &mut Row {
        &mut self.rows[slot.table_index()]
    }

    /// The minion at `slot`, if any.
    #[must_use]
    pub fn minion(&self, slot: Slot) -> Option<&Minion> {
        self.row(slot.row).get(slot.index)
    }

    pub fn minion_mut(&mut self, slot: Slot) -> Option<&mut Minion> {
        self.row_mut(slot.row).get_mut(slot.index)
    }

    /// Whether `side`'s front row holds a tank.
    #[must_use]
    pub fn front_has_tank(&self, side: Side) -> bool {
        self.row(RowSlot::new(side, RowKind::Front)).has_tank()
    }

    /// Rows in table order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Both rows of one player.
    pub fn rows_of_mut(&mut self, side: Side) -> [&mut Row; 2] {
        let [two_back, two_front, one_front, one_back] = &mut self.rows;
        match side {
            Side::One => [one_front, one_back],
            Side::Two => [two_back, two_front],
        }
    }

    /// Mutable access to an ability's user and target.
    ///
    /// Returns `None` if either slot is empty. When both slots are the same
    /// the minion is returned once as `SelfTarget`.
    pub fn ability_targets(&mut self, user: Slot, target: Slot) -> Option<AbilityTargets<'_>> {
        if user == target {
            return self.minion_mut(user).map(AbilityTargets::SelfTarget);
        }

        let user_row = user.row.table_index();
        let target_row = target.row.table_index();

        if user_row == target_row {
            let row = self.rows[user_row].as_mut_slice();
            let high = user.index.max(target.index);
            if high >= row.len() {
                return None;
            }
            let low = user.index.min(target.index);
            let (left, right) = row.split_at_mut(high);
            let (first, second) = (&mut left[low], &mut right[0]);
            return Some(if user.index < target.index {
                AbilityTargets::Pair { user: first, target: second }
            } else {
                AbilityTargets::Pair { user: second, target: first }
            });
        }

        let (left, right) = self.rows.split_at_mut(user_row.max(target_row));
        let (low_row, high_row) = (&mut left[user_row.min(target_row)], &mut right[0]);
        let (user_row, target_row) = if user.row.table_index() < target.row.table_index() {
            (low_row, high_row)
        } else {
            (high_row, low_row)
        };

        Some(AbilityTargets::Pair {
            user: user_row.get_mut(user.index)?,
            target: target_row.get_mut(target.index)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, MinionKind};

    fn minion(name: &str) -> Minion {
        Minion::new(MinionKind::Sentinel, &CardDefinition::minion(name, 1, 3, 1))
    }

    #[test]
    fn test_table_index_round_trip() {
        for (index, slot) in RowSlot::TABLE_ORDER.into_iter().enumerate() {
            assert_eq!(slot.table_index(), index);
            assert_eq!(RowSlot::from_table_index(index as i32), Some(slot));
        }
        assert_eq!(RowSlot::from_table_index(4), None);
        assert_eq!(RowSlot::from_table_index(-1), None);
    }

    #[test]
    fn test_coordinate_ownership() {
        let p2_back = Slot::from_coordinates(Coordinates::new(0, 0)).unwrap();
        let p2_front = Slot::from_coordinates(Coordinates::new(1, 2)).unwrap();
        let p1_front = Slot::from_coordinates(Coordinates::new(2, 0)).unwrap();
        let p1_back = Slot::from_coordinates(Coordinates::new(3, 4)).unwrap();

        assert_eq!(p2_back.row, RowSlot::new(Side::Two, RowKind::Back));
        assert_eq!(p2_front.row, RowSlot::new(Side::Two, RowKind::Front));
        assert_eq!(p1_front.row, RowSlot::new(Side::One, RowKind::Front));
        assert_eq!(p1_back.row, RowSlot::new(Side::One, RowKind::Back));
        assert_eq!(p1_back.index, 4);
        assert!(Slot::from_coordinates(Coordinates::new(2, -1)).is_none());
    }

    #[test]
    fn test_rows_of_side() {
        let mut board = Board::new();
        board.row_mut(RowSlot::new(Side::One, RowKind::Back)).push(minion("a"));
        board.row_mut(RowSlot::new(Side::Two, RowKind::Front)).push(minion("b"));

        let [front, back] = board.rows_of_mut(Side::One);
        assert!(front.is_empty());
        assert_eq!(back.len(), 1);

        let [back, front] = board.rows_of_mut(Side::Two);
        assert!(back.is_empty());
        assert_eq!(front.len(), 1);
    }

    #[test]
    fn test_ability_targets_across_rows() {
        let mut board = Board::new();
        let user = Slot::new(RowSlot::new(Side::One, RowKind::Back), 0);
        let target = Slot::new(RowSlot::new(Side::Two, RowKind::Back), 0);
        board.row_mut(user.row).push(minion("user"));
        board.row_mut(target.row).push(minion("target"));

        match board.ability_targets(user, target) {
            Some(AbilityTargets::Pair { user, target }) => {
                assert_eq!(user.card.name, "user");
                assert_eq!(target.card.name, "target");
            }
            other => panic!("unexpected targets: {other:?}"),
        }
    }

    #[test]
    fn test_ability_targets_same_row() {
        let mut board = Board::new();
        let row = RowSlot::new(Side::One, RowKind::Back);
        board.row_mut(row).push(minion("a"));
        board.row_mut(row).push(minion("b"));

        match board.ability_targets(Slot::new(row, 1), Slot::new(row, 0)) {
            Some(AbilityTargets::Pair { user, target }) => {
                assert_eq!(user.card.name, "b");
                assert_eq!(target.card.name, "a");
            }
            other => panic!("unexpected targets: {other:?}"),
        }

        assert!(matches!(
            board.ability_targets(Slot::new(row, 0), Slot::new(row, 0)),
            Some(AbilityTargets::SelfTarget(_))
        ));
        assert!(board.ability_targets(Slot::new(row, 0), Slot::new(row, 2)).is_none());
    }
}
