//! Lotto cards.
//!
//! A card is a fixed 3 x 9 grid holding 15 unique numbers, five per row.
//! Within a row the numbers ascend left to right; the other four cells
//! are blank. Cards are dealt once before a round and only change when
//! their owner strikes a number.

mod cell;
mod grid;

pub use cell::{Cell, CellPos};
pub use grid::Card;
