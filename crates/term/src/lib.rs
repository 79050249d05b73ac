//! Terminal front end.
//!
//! A small, line-oriented presentation layer for console play. It
//! implements the engine's [`GameUi`](crate::engine::GameUi) seam on top of a
//! `BufRead`/`Write` pair and renders the board as framed text.
//!
//! Goals:
//! - Keep `core` free of I/O and `engine` free of text
//! - Stay testable against in-memory buffers
//! - Use color only when the output is a terminal

pub mod board_view;
pub mod console;

pub use minewalk_core as core;
pub use minewalk_engine as engine;
pub use minewalk_input as input;
pub use minewalk_types as types;

pub use board_view::BoardView;
pub use console::ConsoleUi;
