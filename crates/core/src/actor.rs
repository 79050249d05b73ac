//! Actor module - the player walking across the board
//!
//! The actor tracks its own position, remaining lives and move count. Movement
//! is clamped to the board: a step that would leave the grid is refused and
//! reported as [`Step::Blocked`] without counting as a move.

use tracing::{debug, warn};

use crate::error::ActorError;
use crate::types::{Command, DEFAULT_LIVES};

/// Result of a single movement call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The actor moved one cell and the move counter advanced
    Moved,
    /// The actor is already on the edge in that direction; nothing changed
    Blocked(Command),
}

/// The moving entity representing the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    row: usize,
    col: usize,
    lives: u32,
    moves: u32,
}

impl Actor {
    /// Create an actor at (row, col) with the given number of lives
    pub fn new(row: usize, col: usize, lives: u32) -> Result<Self, ActorError> {
        if lives == 0 {
            return Err(ActorError::InvalidLives);
        }
        Ok(Self {
            row,
            col,
            lives,
            moves: 0,
        })
    }

    /// Create an actor at the top-left corner with the given number of lives
    pub fn with_lives(lives: u32) -> Result<Self, ActorError> {
        Self::new(0, 0, lives)
    }

    /// Zero-based row the actor stands on
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column the actor stands on
    pub fn col(&self) -> usize {
        self.col
    }

    /// Lives remaining
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Number of moves that actually changed the position
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Move one row up, or report [`Step::Blocked`] on the top edge
    pub fn move_up(&mut self) -> Step {
        if self.row > 0 {
            self.row -= 1;
            self.advance()
        } else {
            self.blocked(Command::Up)
        }
    }

    /// Move one row down, or report [`Step::Blocked`] on the last of `max_rows` rows
    pub fn move_down(&mut self, max_rows: usize) -> Step {
        if self.row + 1 < max_rows {
            self.row += 1;
            self.advance()
        } else {
            self.blocked(Command::Down)
        }
    }

    /// Move one column left, or report [`Step::Blocked`] on the left edge
    pub fn move_left(&mut self) -> Step {
        if self.col > 0 {
            self.col -= 1;
            self.advance()
        } else {
            self.blocked(Command::Left)
        }
    }

    /// Move one column right, or report [`Step::Blocked`] on the last of `max_cols` columns
    pub fn move_right(&mut self, max_cols: usize) -> Step {
        if self.col + 1 < max_cols {
            self.col += 1;
            self.advance()
        } else {
            self.blocked(Command::Right)
        }
    }

    fn advance(&mut self) -> Step {
        self.moves += 1;
        debug!(row = self.row, col = self.col, moves = self.moves, "actor moved");
        Step::Moved
    }

    fn blocked(&self, command: Command) -> Step {
        warn!(
            command = command.as_str(),
            row = self.row,
            col = self.col,
            "cannot move past the {} edge",
            command.edge()
        );
        Step::Blocked(command)
    }

    /// Take one life away
    ///
    /// Losing a life when none are left is an illegal state and is returned
    /// as [`ActorError::NoLivesLeft`].
    pub fn lose_life(&mut self) -> Result<(), ActorError> {
        if self.lives == 0 {
            return Err(ActorError::NoLivesLeft);
        }
        self.lives -= 1;
        Ok(())
    }

    /// Whether the actor stands on the bottom-right cell of a `max_rows x max_cols` board
    pub fn has_reached_goal(&self, max_rows: usize, max_cols: usize) -> bool {
        self.row + 1 == max_rows && self.col + 1 == max_cols
    }

    /// Position in chess-like notation: column letter then 1-based row
    ///
    /// ```
    /// use minewalk_core::Actor;
    ///
    /// let actor = Actor::new(0, 2, 3).unwrap();
    /// assert_eq!(actor.position(), "C1");
    ///
    /// let actor = Actor::new(7, 0, 3).unwrap();
    /// assert_eq!(actor.position(), "A8");
    /// ```
    pub fn position(&self) -> String {
        cell_label(self.row, self.col)
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            lives: DEFAULT_LIVES,
            moves: 0,
        }
    }
}

/// Chess-like label for (row, col), e.g. (0, 2) -> "C1"
pub fn cell_label(row: usize, col: usize) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

/// Column letter, 'A'-based; columns past 'Z' continue through the code points after it
pub fn column_letter(col: usize) -> char {
    u32::try_from(col)
        .ok()
        .and_then(|c| c.checked_add('A' as u32))
        .and_then(char::from_u32)
        .unwrap_or('?')
}
