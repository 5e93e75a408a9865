//! # fibscroll-tui
//!
//! Interactive terminal viewer for the extended Fibonacci sequence, built
//! on ratatui with an Elm architecture: input events become
//! [`TuiMessage`]s, [`TuiApp`] updates its [`Session`](fibscroll_core::Session),
//! and each frame is rendered from the session's current state.

pub mod controls;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod mouse;
pub mod overlay;
pub mod sequence;
pub mod styles;

pub use messages::TuiMessage;
pub use model::{TuiApp, TuiOptions};
pub use overlay::OverlayStore;
