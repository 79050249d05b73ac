//! GameController: drives one session from instructions to goodbye.

use anyhow::Result;
use tracing::{error, info};

use crate::core::Game;
use crate::types::Outcome;
use crate::ui::GameUi;

pub struct GameController<U: GameUi> {
    game: Game,
    ui: U,
}

impl<U: GameUi> GameController<U> {
    pub fn new(game: Game, ui: U) -> Self {
        Self { game, ui }
    }

    /// Play the session to completion.
    ///
    /// Errors raised while the game is running (closed input, I/O failure,
    /// engine errors) are logged, shown through the UI and end the session
    /// as [`Outcome::Aborted`]; the result phase is skipped in that case.
    pub fn start_game(&mut self) -> Outcome {
        if let Err(e) = self.run() {
            error!(error = %e, "session aborted");
            if let Err(ui_err) = self.ui.display_error(&format!("Error starting the game: {e}")) {
                error!(error = %ui_err, "failed to report error");
            }
            return Outcome::Aborted;
        }
        self.end_game()
    }

    fn run(&mut self) -> Result<()> {
        self.ui.display_instructions(&self.game.goal_label())?;
        while !self.game.has_ended() {
            self.ui.display_status(
                &self.game.position(),
                self.game.moves(),
                self.game.lives(),
            )?;
            self.handle_player_input()?;
        }
        Ok(())
    }

    fn handle_player_input(&mut self) -> Result<()> {
        let command = self.ui.get_command()?;
        if command.is_empty() {
            return Ok(());
        }
        let outcome = self.game.process_command(&command)?;
        self.ui.display_notice(&outcome)
    }

    /// Report the result, then always show the closing message.
    fn end_game(&mut self) -> Outcome {
        let lost = self.game.is_lost();
        let outcome = if lost { Outcome::Lost } else { Outcome::Won };
        info!(
            outcome = outcome.as_str(),
            moves = self.game.moves(),
            lives = self.game.lives(),
            "session ended"
        );

        if let Err(e) = self.ui.display_result(lost, &self.game.snapshot()) {
            error!(error = %e, "failed to display result");
            if let Err(ui_err) = self.ui.display_error(&format!("Error ending the game: {e}")) {
                error!(error = %ui_err, "failed to report error");
            }
        }
        if let Err(e) = self.ui.display_closing() {
            error!(error = %e, "failed to display closing message");
        }
        outcome
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn into_parts(self) -> (Game, U) {
        (self.game, self.ui)
    }
}
