//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid of `u8` markers stored in a flat,
//! row-major vector. Coordinates are `(row, col)` with row 0 at the top and
//! column 0 on the left. Every accessor goes through [`Board::index`], so
//! out-of-range coordinates are rejected in exactly one place.

use tracing::debug;

use crate::error::BoardError;
use crate::rng::GameRng;
use crate::types::{Marker, EMPTY, HAZARD};

/// The game board with its hazard layout
#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of markers, row-major order (row * cols + col)
    cells: Vec<Marker>,
    /// Source of randomness for hazard placement
    rng: GameRng,
}

impl Board {
    /// Create an empty board seeded from OS entropy
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Self::with_rng(rows, cols, GameRng::from_entropy())
    }

    /// Create an empty board whose hazard placement is reproducible
    pub fn with_seed(rows: usize, cols: usize, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(rows, cols, GameRng::new(seed))
    }

    /// Create an empty board using the given RNG
    pub fn with_rng(rows: usize, cols: usize, rng: GameRng) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
            rng,
        })
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Seed of the placement RNG
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Get the marker at (row, col)
    pub fn get_cell(&self, row: usize, col: usize) -> Result<Marker, BoardError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Overwrite the marker at (row, col)
    pub fn set_cell(&mut self, row: usize, col: usize, value: Marker) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Check if (row, col) holds a hazard
    pub fn is_hazard(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.get_cell(row, col)? == HAZARD)
    }

    /// Number of cells currently marked as hazards
    pub fn hazard_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m == HAZARD).count()
    }

    /// Mark `count` additional distinct cells as hazards
    ///
    /// Cells are chosen by uniform rejection sampling: a random (row, col) is
    /// drawn and marked unless it already holds a hazard. Fails without
    /// touching the board when `count` is zero or exceeds the cells that are
    /// not yet hazards.
    pub fn place_hazards(&mut self, count: usize) -> Result<(), BoardError> {
        let available = self.capacity() - self.hazard_count();
        if count == 0 || count > available {
            return Err(BoardError::InvalidHazardCount { count, available });
        }

        let mut placed = 0;
        while placed < count {
            let row = self.rng.gen_index(self.rows);
            let col = self.rng.gen_index(self.cols);
            let idx = row * self.cols + col;
            if self.cells[idx] != HAZARD {
                self.cells[idx] = HAZARD;
                placed += 1;
            }
        }

        debug!(count, seed = self.rng.seed(), "placed hazards");
        Ok(())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Marker] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::with_seed(5, 4, 1).unwrap();
        assert_eq!(board.index(0, 0), Ok(0));
        assert_eq!(board.index(0, 3), Ok(3));
        assert_eq!(board.index(1, 0), Ok(4));
        assert_eq!(board.index(4, 3), Ok(19));
        assert!(board.index(5, 0).is_err());
        assert!(board.index(0, 4).is_err());
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::with_seed(5, 5, 1).unwrap();

        board.set_cell(0, 0, HAZARD).unwrap();
        board.set_cell(2, 3, 9).unwrap();

        assert_eq!(board.get_cell(0, 0), Ok(HAZARD));
        assert_eq!(board.get_cell(2, 3), Ok(9));

        assert_eq!(board.cells[0], HAZARD);
        assert_eq!(board.cells[2 * 5 + 3], 9);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Board::with_seed(0, 5, 1).unwrap_err(),
            BoardError::InvalidDimensions { rows: 0, cols: 5 }
        );
        assert!(Board::with_seed(5, 0, 1).is_err());
    }

    #[test]
    fn test_non_hazard_marker_is_not_a_hazard() {
        let mut board = Board::with_seed(3, 3, 1).unwrap();
        board.set_cell(1, 1, 9).unwrap();
        assert_eq!(board.is_hazard(1, 1), Ok(false));
        assert_eq!(board.hazard_count(), 0);
    }

    #[test]
    fn test_place_hazards_respects_existing() {
        let mut board = Board::with_seed(2, 2, 3).unwrap();
        board.set_cell(0, 0, HAZARD).unwrap();

        let err = board.place_hazards(4).unwrap_err();
        assert_eq!(err, BoardError::InvalidHazardCount { count: 4, available: 3 });
        assert_eq!(board.hazard_count(), 1);

        board.place_hazards(3).unwrap();
        assert_eq!(board.hazard_count(), 4);
    }
}
