//! Batch file records.
//!
//! - `input`: serde mirror of the input file and conversion to `Action`
//! - `output`: rendering of `ActionResult`s to output records

pub mod input;
pub mod output;

pub use input::{ActionsInput, CardInput, DecksInput, GameInput, Input, StartGameInput};
pub use output::{render, OutputRecord, OutputValue};
