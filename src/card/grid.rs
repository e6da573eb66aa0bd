//! Card grid: generation, lookup and marking.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cell::{Cell, CellPos};
use crate::core::{
    GameRng, LottoError, LottoResult, CARD_COLS, CARD_ROWS, MAX_NUMBER, NUMBERS_PER_CARD,
    NUMBERS_PER_ROW,
};

const COLUMNS: [usize; CARD_COLS] = {
    let mut cols = [0; CARD_COLS];
    let mut i = 0;
    while i < CARD_COLS {
        cols[i] = i;
        i += 1;
    }
    cols
};

/// A player's card.
///
/// ## Invariants
///
/// - Every row has exactly `NUMBERS_PER_ROW` populated cells.
/// - Numbers are unique across the card and lie in `1..=MAX_NUMBER`.
/// - Populated cells ascend left to right within a row.
///
/// Marking replaces `Cell::Number` with `Cell::Marked`; nothing else ever
/// changes the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    cells: [[Cell; CARD_COLS]; CARD_ROWS],
}

impl Card {
    /// Deal a card from the full `1..=MAX_NUMBER` range.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        let pool: Vec<u8> = (1..=MAX_NUMBER).collect();
        Self::deal(pool, rng)
    }

    /// Deal a card using only the supplied numbers.
    ///
    /// The list must hold at least `NUMBERS_PER_CARD` unique numbers, all
    /// within `1..=MAX_NUMBER`.
    pub fn from_numbers(numbers: &[u8], rng: &mut GameRng) -> LottoResult<Self> {
        if numbers.len() < NUMBERS_PER_CARD {
            return Err(LottoError::NotEnoughNumbers {
                supplied: numbers.len(),
                required: NUMBERS_PER_CARD,
            });
        }

        let mut seen = [false; u8::MAX as usize + 1];
        for &n in numbers {
            if std::mem::replace(&mut seen[n as usize], true) {
                return Err(LottoError::DuplicateNumber(n));
            }
        }

        if let Some(&n) = numbers.iter().find(|&&n| !in_range(n)) {
            return Err(LottoError::NumberOutOfRange(n));
        }

        Ok(Self::deal(numbers.to_vec(), rng))
    }

    /// Build a card from a fixed layout, `0` marking a blank cell.
    ///
    /// ```
    /// use rust_lotto::card::Card;
    ///
    /// let card = Card::from_layout([
    ///     [1, 2, 3, 4, 5, 0, 0, 0, 0],
    ///     [6, 7, 8, 9, 10, 0, 0, 0, 0],
    ///     [0, 0, 0, 0, 11, 12, 13, 14, 15],
    /// ])
    /// .unwrap();
    /// assert_eq!(card.locate(12).map(|p| (p.row, p.col)), Some((2, 5)));
    /// ```
    pub fn from_layout(layout: [[u8; CARD_COLS]; CARD_ROWS]) -> LottoResult<Self> {
        let mut seen = [false; MAX_NUMBER as usize + 1];
        let mut cells = [[Cell::Blank; CARD_COLS]; CARD_ROWS];

        for (row, values) in layout.iter().enumerate() {
            let populated: Vec<u8> = values.iter().copied().filter(|&n| n != 0).collect();
            if populated.len() != NUMBERS_PER_ROW {
                return Err(LottoError::InvalidLayout {
                    row,
                    reason: "wrong number of populated cells",
                });
            }
            if populated.windows(2).any(|w| w[0] >= w[1]) {
                return Err(LottoError::InvalidLayout {
                    row,
                    reason: "numbers must ascend left to right",
                });
            }

            for (col, &n) in values.iter().enumerate() {
                if n == 0 {
                    continue;
                }
                if !in_range(n) {
                    return Err(LottoError::NumberOutOfRange(n));
                }
                if std::mem::replace(&mut seen[n as usize], true) {
                    return Err(LottoError::DuplicateNumber(n));
                }
                cells[row][col] = Cell::Number(n);
            }
        }

        Ok(Self { cells })
    }

    /// Fill each row from a shrinking pool so numbers never repeat.
    fn deal(mut pool: Vec<u8>, rng: &mut GameRng) -> Self {
        let mut cells = [[Cell::Blank; CARD_COLS]; CARD_ROWS];

        for row in cells.iter_mut() {
            let mut numbers = rng.sample(&pool, NUMBERS_PER_ROW);
            let mut cols = rng.sample(&COLUMNS, NUMBERS_PER_ROW);
            numbers.sort_unstable();
            cols.sort_unstable();

            for (&col, &n) in cols.iter().zip(&numbers) {
                row[col] = Cell::Number(n);
            }
            pool.retain(|n| !numbers.contains(n));
        }

        let card = Self { cells };
        let numbers: Vec<u8> = card.numbers().collect();
        debug!(target: "rust_lotto::card", ?numbers, "dealt card");
        card
    }

    /// Find an unstruck number on the card.
    ///
    /// Struck numbers are reported as not found.
    #[must_use]
    pub fn locate(&self, number: u8) -> Option<CellPos> {
        self.cells.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|&c| c == Cell::Number(number))
                .map(|col| CellPos::new(row, col))
        })
    }

    /// Strike the number at `pos`.
    ///
    /// Fails if the cell is blank, already struck, or off the grid.
    pub fn mark(&mut self, pos: CellPos) -> LottoResult<()> {
        let cell = self
            .cells
            .get_mut(pos.row)
            .and_then(|r| r.get_mut(pos.col))
            .ok_or(LottoError::CellNotMarkable { row: pos.row, col: pos.col })?;

        match *cell {
            Cell::Number(n) => {
                *cell = Cell::Marked(n);
                Ok(())
            }
            Cell::Blank | Cell::Marked(_) => {
                Err(LottoError::CellNotMarkable { row: pos.row, col: pos.col })
            }
        }
    }

    /// Cell at `pos`, or `None` off the grid.
    #[must_use]
    pub fn cell(&self, pos: CellPos) -> Option<Cell> {
        self.cells.get(pos.row).and_then(|r| r.get(pos.col)).copied()
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; CARD_COLS]> {
        self.cells.iter()
    }

    /// All numbers on the card, struck or not, row by row.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().flatten().filter_map(|c| c.number())
    }

    /// Count of struck cells.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_marked()).count()
    }

    /// True once every number has been struck.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.marked_count() == NUMBERS_PER_CARD
    }
}

fn in_range(n: u8) -> bool {
    (1..=MAX_NUMBER).contains(&n)
}
