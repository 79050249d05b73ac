//! Minewalk (workspace facade crate).
//!
//! This package exposes the `minewalk::{core,engine,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`,
//! plus the command-line [`config`] used by the binary.

pub mod config;

pub use minewalk_core as core;
pub use minewalk_engine as engine;
pub use minewalk_input as input;
pub use minewalk_term as term;
pub use minewalk_types as types;
