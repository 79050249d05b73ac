//! Session orchestration.
//!
//! The controller is thin: it owns a [`crate::core::Game`] and a [`GameUi`]
//! and shuttles data between them until the session ends. All rules live in
//! `minewalk-core`; all text lives behind the [`GameUi`] seam.

pub mod controller;
pub mod ui;

pub use minewalk_core as core;
pub use minewalk_types as types;

pub use controller::GameController;
pub use ui::GameUi;
