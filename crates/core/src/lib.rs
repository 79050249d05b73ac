//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the minefield walk: the board with its
//! hidden hazards, the actor that walks across it, and the rule engine that
//! ties the two together. It performs **no I/O**; the only side channel is
//! `tracing` diagnostics.
//!
//! - **Deterministic**: a board built with a seed always gets the same hazard layout
//! - **Fallible by value**: construction and bounds problems come back as typed errors
//! - **UI-agnostic**: turn results are returned as data for any front end to render
//!
//! # Module Structure
//!
//! - [`board`]: `rows x cols` grid of markers with hazard placement
//! - [`actor`]: position, lives and move counter with edge clamping
//! - [`game`]: the rule engine for one session
//! - [`rng`]: seedable randomness for hazard placement
//! - [`snapshot`]: read-only session copy for rendering
//! - [`error`]: error enums for the above
//!
//! # Game Rules
//!
//! - The actor starts in the top-left cell (A1) and wins by reaching the
//!   bottom-right cell.
//! - Each accepted move that lands on a hazard costs one life.
//! - The session ends when lives run out or the goal is reached.
//!
//! # Example
//!
//! ```
//! use minewalk_core::{Actor, Board, Game};
//!
//! let board = Board::with_seed(8, 8, 12345).unwrap();
//! let mut game = Game::new(board, Actor::default, 5).unwrap();
//!
//! game.process_command("down").unwrap();
//! assert_eq!(game.position(), "A2");
//! assert_eq!(game.moves(), 1);
//! assert!(!game.has_ended());
//! ```

pub mod actor;
pub mod board;
pub mod error;
pub mod game;
pub mod rng;
pub mod snapshot;

pub use minewalk_types as types;

// Re-export commonly used types for convenience
pub use actor::{cell_label, column_letter, Actor, Step};
pub use board::Board;
pub use error::{ActorError, BoardError, GameError};
pub use game::{Game, TurnOutcome};
pub use rng::GameRng;
pub use snapshot::GameSnapshot;
