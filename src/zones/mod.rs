//! Card locations: deck, rows and the table.
//!
//! ## Key Types
//!
//! - `DeckManager`: template decks and the current deck being drawn from
//! - `Row`: bounded, ordered minion row
//! - `Board`: the four rows, addressed by `RowSlot { side, kind }`
//! - `Slot`: a single table position decoded from input coordinates
//!
//! Hands are plain `Vec<Minion>` on the player state.

pub mod board;
pub mod deck;
pub mod row;

pub use board::{Board, RowSlot, Slot};
pub use deck::DeckManager;
pub use row::{Row, RowKind};
