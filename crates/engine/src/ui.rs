//! The display seam between the controller and a front end.

use anyhow::Result;

use crate::core::{GameSnapshot, TurnOutcome};

/// Everything the controller needs from a front end.
///
/// Implementations own both the input source and the output sink. Errors are
/// I/O failures or a closed input stream; the controller treats them as the
/// end of the session.
pub trait GameUi {
    /// Explain the rules once, naming the goal cell (e.g. "H8").
    fn display_instructions(&mut self, goal: &str) -> Result<()>;

    /// Block until the player enters a command. Returns normalized text.
    fn get_command(&mut self) -> Result<String>;

    /// Show the per-turn status line.
    fn display_status(&mut self, position: &str, moves: u32, lives: u32) -> Result<()>;

    /// Tell the player what the last turn did, if anything noteworthy.
    fn display_notice(&mut self, outcome: &TurnOutcome) -> Result<()>;

    /// Announce the result and reveal the board.
    fn display_result(&mut self, lost: bool, snapshot: &GameSnapshot) -> Result<()>;

    /// Report an error that ended the session.
    fn display_error(&mut self, message: &str) -> Result<()>;

    /// Say goodbye.
    fn display_closing(&mut self) -> Result<()>;
}
