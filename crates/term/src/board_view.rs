//! BoardView: maps a `core::GameSnapshot` into a framed text grid.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{column_letter, GameSnapshot};

/// Glyph for the actor's cell
pub const ACTOR: char = '@';
/// Glyph for the actor standing on a revealed hazard
pub const ACTOR_ON_HAZARD: char = 'X';
/// Glyph for a revealed hazard
pub const HAZARD: char = '*';
/// Glyph for any other cell
pub const UNKNOWN: char = '.';

/// Text renderer for the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardView {
    /// Show hazard cells instead of hiding them
    reveal: bool,
}

impl BoardView {
    pub fn new(reveal: bool) -> Self {
        Self { reveal }
    }

    /// A view that shows every hazard (used once the session is over).
    pub fn revealed() -> Self {
        Self::new(true)
    }

    fn glyph(&self, snap: &GameSnapshot, row: usize, col: usize) -> char {
        let hazard = self.reveal && snap.is_hazard(row, col);
        match (snap.is_actor(row, col), hazard) {
            (true, true) => ACTOR_ON_HAZARD,
            (true, false) => ACTOR,
            (false, true) => HAZARD,
            (false, false) => UNKNOWN,
        }
    }

    /// Render the board with column letters on top and 1-based row numbers on the left.
    pub fn render(&self, snap: &GameSnapshot) -> String {
        let label_w = snap.rows.to_string().len();
        let inner_w = snap.cols * 2 + 1;
        let mut out = String::new();

        let letters: String = (0..snap.cols).map(|c| format!(" {}", column_letter(c))).collect();
        out.push_str(&format!("{:label_w$} {letters}\n", ""));
        out.push_str(&format!("{:label_w$}┌{}┐\n", "", "─".repeat(inner_w)));

        for row in 0..snap.rows {
            let cells: String = (0..snap.cols)
                .map(|col| format!(" {}", self.glyph(snap, row, col)))
                .collect();
            out.push_str(&format!("{:>label_w$}│{cells} │\n", row + 1));
        }

        out.push_str(&format!("{:label_w$}└{}┘", "", "─".repeat(inner_w)));
        out
    }
}
