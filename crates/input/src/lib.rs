//! Line input module (engine-facing).
//!
//! This module is independent of any terminal library. It reads one line per
//! turn from any `BufRead` and normalizes it (trimmed, lower-cased); the rule
//! engine decides whether the text names a command.

pub mod map;
pub mod reader;

pub use map::normalize;
pub use reader::{read_line, Line};
