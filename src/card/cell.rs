//! Single card cells and their coordinates.

use serde::{Deserialize, Serialize};

/// Contents of one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unpopulated cell.
    #[default]
    Blank,
    /// A number not yet struck.
    Number(u8),
    /// A struck number. The value is kept for reporting.
    Marked(u8),
}

impl Cell {
    #[must_use]
    pub fn is_blank(self) -> bool {
        matches!(self, Cell::Blank)
    }

    #[must_use]
    pub fn is_marked(self) -> bool {
        matches!(self, Cell::Marked(_))
    }

    /// The number printed in this cell, struck or not.
    #[must_use]
    pub fn number(self) -> Option<u8> {
        match self {
            Cell::Blank => None,
            Cell::Number(n) | Cell::Marked(n) => Some(n),
        }
    }
}

/// Row/column coordinate on a card (both 0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {} col {}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_states() {
        assert!(Cell::Blank.is_blank());
        assert_eq!(Cell::Blank.number(), None);

        assert!(!Cell::Number(7).is_marked());
        assert_eq!(Cell::Number(7).number(), Some(7));

        assert!(Cell::Marked(7).is_marked());
        assert_eq!(Cell::Marked(7).number(), Some(7));

        assert_eq!(Cell::default(), Cell::Blank);
    }

    #[test]
    fn test_cell_pos_display() {
        assert_eq!(CellPos::new(2, 8).to_string(), "row 2 col 8");
    }
}
