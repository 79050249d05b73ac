use crate::actor::Actor;
use crate::board::Board;
use crate::types::{Marker, HAZARD};

/// Read-only copy of a session, handed to the display layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major markers, `rows * cols` long
    pub cells: Vec<Marker>,
    pub row: usize,
    pub col: usize,
    pub position: String,
    pub lives: u32,
    pub moves: u32,
    pub reached_goal: bool,
}

impl GameSnapshot {
    pub fn capture(board: &Board, actor: &Actor) -> Self {
        Self {
            rows: board.rows(),
            cols: board.cols(),
            cells: board.cells().to_vec(),
            row: actor.row(),
            col: actor.col(),
            position: actor.position(),
            lives: actor.lives(),
            moves: actor.moves(),
            reached_goal: actor.has_reached_goal(board.rows(), board.cols()),
        }
    }

    /// Whether (row, col) holds a hazard; false outside the grid
    pub fn is_hazard(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col] == HAZARD
    }

    pub fn is_actor(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }

    pub fn lost(&self) -> bool {
        self.lives == 0
    }
}
