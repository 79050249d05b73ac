//! ConsoleUi: line-oriented front end over any reader/writer pair.
//!
//! Output goes through crossterm commands queued onto the writer, so the same
//! code drives a real terminal and an in-memory buffer in tests. Color is
//! opt-in; without it the output is plain text.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::board_view::BoardView;
use crate::core::{GameSnapshot, TurnOutcome};
use crate::engine::GameUi;
use crate::input::{read_line, Line};

pub const WELCOME: &str = "Welcome to Minesweeper!";
pub const COMMANDS: &str = "Use commands: 'up', 'down', 'left', 'right' to move.";
pub const PROMPT: &str = "Enter a move command: ";
pub const EMPTY_COMMAND: &str = "Command cannot be empty. Try again.";
pub const INVALID_COMMAND: &str = "Invalid command. Please use 'up', 'down', 'left', or 'right'.";
pub const MINE_HIT: &str = "You stepped on a mine, you lose one life.";
pub const LOST: &str = "You lost all your lives! Game over.";
pub const WON: &str = "Congratulations! You reached the goal!";
pub const CLOSING: &str = "Thank you for playing!";

pub struct ConsoleUi<R, W> {
    reader: R,
    writer: W,
    color: bool,
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn line(&mut self, text: &str) -> Result<()> {
        self.colored_line(text, None)
    }

    fn colored_line(&mut self, text: &str, color: Option<Color>) -> Result<()> {
        match color {
            Some(c) if self.color => {
                self.writer.queue(SetForegroundColor(c))?;
                self.writer.queue(Print(text))?;
                self.writer.queue(ResetColor)?;
            }
            _ => {
                self.writer.queue(Print(text))?;
            }
        }
        self.writer.queue(Print("\n"))?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> GameUi for ConsoleUi<R, W> {
    fn display_instructions(&mut self, goal: &str) -> Result<()> {
        self.colored_line(WELCOME, Some(Color::Cyan))?;
        self.line(&format!("Your goal is to reach {goal} while avoiding mines."))?;
        self.line(COMMANDS)
    }

    fn get_command(&mut self) -> Result<String> {
        self.line(PROMPT)?;
        loop {
            match read_line(&mut self.reader)? {
                Line::Text(command) => return Ok(command),
                Line::Empty => self.colored_line(EMPTY_COMMAND, Some(Color::Yellow))?,
                Line::Closed => bail!("input closed"),
            }
        }
    }

    fn display_status(&mut self, position: &str, moves: u32, lives: u32) -> Result<()> {
        self.line(&format!("Position: {position} | Moves: {moves} | Lives: {lives}"))
    }

    fn display_notice(&mut self, outcome: &TurnOutcome) -> Result<()> {
        match outcome {
            TurnOutcome::Moved { hazard: false } => Ok(()),
            TurnOutcome::Moved { hazard: true } => self.colored_line(MINE_HIT, Some(Color::Red)),
            TurnOutcome::Blocked { command, hazard } => {
                self.colored_line(
                    &format!(
                        "Cannot move {}, already at the {} edge.",
                        command.as_str(),
                        command.edge()
                    ),
                    Some(Color::Yellow),
                )?;
                if *hazard {
                    self.colored_line(MINE_HIT, Some(Color::Red))?;
                }
                Ok(())
            }
            TurnOutcome::Invalid(_) => self.colored_line(INVALID_COMMAND, Some(Color::Yellow)),
        }
    }

    fn display_result(&mut self, lost: bool, snapshot: &GameSnapshot) -> Result<()> {
        if lost {
            self.colored_line(LOST, Some(Color::Red))?;
        } else {
            self.colored_line(WON, Some(Color::Green))?;
        }
        self.line(&BoardView::revealed().render(snapshot))
    }

    fn display_error(&mut self, message: &str) -> Result<()> {
        self.colored_line(message, Some(Color::Red))
    }

    fn display_closing(&mut self) -> Result<()> {
        self.line(CLOSING)
    }
}
