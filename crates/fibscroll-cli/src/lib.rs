//! # fibscroll-cli
//!
//! Non-interactive output: a printed viewport snapshot with its colour
//! scheme, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::FramePresenter;
