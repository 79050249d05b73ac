//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no external dependencies, so it can be
//! used from the rule engine, the controller and the terminal layer alike.
//!
//! # Board Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 8 | Board height |
//! | `DEFAULT_COLS` | 8 | Board width |
//! | `DEFAULT_MINES` | 5 | Hazards placed at session start |
//! | `DEFAULT_LIVES` | 3 | Lives the actor starts with |
//!
//! # Cell Markers
//!
//! The board stores one `u8` marker per cell. `EMPTY` (0) is the initial value
//! and `HAZARD` (1) marks a mine. Other values may be written directly and are
//! treated as non-hazard cells.
//!
//! # Examples
//!
//! ```
//! use minewalk_types::{Command, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! assert_eq!(Command::from_str("down"), Some(Command::Down));
//! assert_eq!(Command::from_str("jump"), None);
//! assert_eq!(Command::Left.as_str(), "left");
//!
//! assert_eq!(DEFAULT_ROWS, 8);
//! assert_eq!(DEFAULT_COLS, 8);
//! ```

/// Default board height in rows
pub const DEFAULT_ROWS: usize = 8;

/// Default board width in columns
pub const DEFAULT_COLS: usize = 8;

/// Default number of hazards placed when a session starts
pub const DEFAULT_MINES: usize = 5;

/// Default number of lives for a fresh actor
pub const DEFAULT_LIVES: u32 = 3;

/// Marker value for an empty cell
pub const EMPTY: u8 = 0;

/// Marker value for a hazard (mine) cell
pub const HAZARD: u8 = 1;

/// A cell marker as stored on the board
pub type Marker = u8;

/// Directional commands accepted by the rule engine
///
/// The command set is intentionally closed: any other input is rejected by the
/// engine as an invalid, no-op turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move one row towards row 0
    Up,
    /// Move one row towards the last row
    Down,
    /// Move one column towards column 0
    Left,
    /// Move one column towards the last column
    Right,
}

impl Command {
    /// All commands, in the order they are listed to the player.
    pub const ALL: [Command; 4] = [Command::Up, Command::Down, Command::Left, Command::Right];

    /// Parse a command from its literal name
    ///
    /// Matching is exact; callers are expected to normalize input (trim and
    /// lower-case) before dispatching.
    ///
    /// # Examples
    ///
    /// ```
    /// use minewalk_types::Command;
    ///
    /// assert_eq!(Command::from_str("up"), Some(Command::Up));
    /// assert_eq!(Command::from_str("right"), Some(Command::Right));
    /// assert_eq!(Command::from_str("Up"), None);
    /// assert_eq!(Command::from_str(""), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "up" => Some(Command::Up),
            "down" => Some(Command::Down),
            "left" => Some(Command::Left),
            "right" => Some(Command::Right),
            _ => None,
        }
    }

    /// Convert to the literal command name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Up => "up",
            Command::Down => "down",
            Command::Left => "left",
            Command::Right => "right",
        }
    }

    /// Name of the board edge that blocks this command
    ///
    /// ```
    /// use minewalk_types::Command;
    ///
    /// assert_eq!(Command::Up.edge(), "top");
    /// assert_eq!(Command::Right.edge(), "right");
    /// ```
    pub fn edge(&self) -> &'static str {
        match self {
            Command::Up => "top",
            Command::Down => "bottom",
            Command::Left => "left",
            Command::Right => "right",
        }
    }
}

/// How a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The actor reached the goal cell with lives remaining
    Won,
    /// The actor ran out of lives
    Lost,
    /// The session was interrupted by an error before a result was reached
    Aborted,
}

impl Outcome {
    /// Lower-case name used in log fields
    ///
    /// ```
    /// use minewalk_types::Outcome;
    ///
    /// assert_eq!(Outcome::Won.as_str(), "won");
    /// assert_eq!(Outcome::Aborted.as_str(), "aborted");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Won => "won",
            Outcome::Lost => "lost",
            Outcome::Aborted => "aborted",
        }
    }
}
