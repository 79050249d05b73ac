//! Game module - the rule engine for one session
//!
//! A [`Game`] exclusively owns one [`Board`] and one [`Actor`]. It turns
//! directional commands into actor movement, charges a life whenever the
//! actor lands on a hazard, and answers whether the session is over.
//!
//! The engine never prints. Everything the player should be told about a turn
//! is returned as a [`TurnOutcome`] for the display layer to render.

use tracing::{info, warn};

use crate::actor::{Actor, Step};
use crate::board::Board;
use crate::error::GameError;
use crate::snapshot::GameSnapshot;
use crate::types::Command;

/// What happened during one call to [`Game::process_command`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The actor moved; `hazard` is true when the new cell cost a life
    Moved { hazard: bool },
    /// The actor stayed put because it is already on that edge; the hazard
    /// check still runs on the cell it stands on
    Blocked { command: Command, hazard: bool },
    /// The input was not a known command; nothing changed
    Invalid(String),
}

/// Rule engine composing the board and the actor
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    actor: Actor,
    mine_count: usize,
}

impl Game {
    /// Start a session: obtain the actor and lay `mine_count` hazards on `board`
    pub fn new<F>(mut board: Board, actor_factory: F, mine_count: usize) -> Result<Self, GameError>
    where
        F: FnOnce() -> Actor,
    {
        if mine_count == 0 {
            return Err(GameError::InvalidMineCount);
        }

        let actor = actor_factory();
        if actor.row() >= board.rows() || actor.col() >= board.cols() {
            return Err(GameError::ActorOutOfBounds {
                row: actor.row(),
                col: actor.col(),
            });
        }
        board.place_hazards(mine_count)?;

        info!(
            rows = board.rows(),
            cols = board.cols(),
            mines = mine_count,
            lives = actor.lives(),
            seed = board.seed(),
            "session started"
        );

        Ok(Self {
            board,
            actor,
            mine_count,
        })
    }

    /// Apply one raw command string
    ///
    /// Only the literal names `up`, `down`, `left` and `right` are accepted.
    /// Anything else yields [`TurnOutcome::Invalid`] without touching the
    /// actor or running the hazard check.
    pub fn process_command(&mut self, command: &str) -> Result<TurnOutcome, GameError> {
        match Command::from_str(command) {
            Some(cmd) => self.apply(cmd),
            None => {
                if self.has_ended() {
                    return Err(GameError::SessionEnded);
                }
                warn!(command, "invalid command");
                Ok(TurnOutcome::Invalid(command.to_string()))
            }
        }
    }

    /// Apply one parsed command
    ///
    /// Commands issued after the session has ended are refused with
    /// [`GameError::SessionEnded`].
    pub fn apply(&mut self, command: Command) -> Result<TurnOutcome, GameError> {
        if self.has_ended() {
            return Err(GameError::SessionEnded);
        }

        let step = match command {
            Command::Up => self.actor.move_up(),
            Command::Down => self.actor.move_down(self.board.rows()),
            Command::Left => self.actor.move_left(),
            Command::Right => self.actor.move_right(self.board.cols()),
        };

        let hazard = self.check_for_hazard()?;
        match step {
            Step::Moved => Ok(TurnOutcome::Moved { hazard }),
            Step::Blocked(command) => Ok(TurnOutcome::Blocked { command, hazard }),
        }
    }

    /// Charge a life if the actor stands on a hazard; returns whether it did
    pub fn check_for_hazard(&mut self) -> Result<bool, GameError> {
        if !self.board.is_hazard(self.actor.row(), self.actor.col())? {
            return Ok(false);
        }
        self.actor.lose_life()?;
        info!(
            position = %self.actor.position(),
            lives = self.actor.lives(),
            "stepped on a mine"
        );
        Ok(true)
    }

    /// Whether the session is over: no lives left or the goal reached
    pub fn has_ended(&self) -> bool {
        self.is_lost() || self.has_reached_goal()
    }

    /// Whether the actor has run out of lives
    pub fn is_lost(&self) -> bool {
        self.actor.lives() == 0
    }

    fn has_reached_goal(&self) -> bool {
        self.actor
            .has_reached_goal(self.board.rows(), self.board.cols())
    }

    /// Spreadsheet-style label of the actor's cell, e.g. "A1"
    pub fn position(&self) -> String {
        self.actor.position()
    }

    /// Moves made so far; edge bumps do not count
    pub fn moves(&self) -> u32 {
        self.actor.moves()
    }

    /// Lives the actor has left
    pub fn lives(&self) -> u32 {
        self.actor.lives()
    }

    /// Number of hazards laid when the session started
    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    /// The board, hazards included
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The actor walking the board
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Label of the goal cell, e.g. "H8" on an 8x8 board
    pub fn goal_label(&self) -> String {
        crate::actor::cell_label(self.board.rows() - 1, self.board.cols() - 1)
    }

    /// Capture a read-only copy of the session for rendering
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.board, &self.actor)
    }
}
