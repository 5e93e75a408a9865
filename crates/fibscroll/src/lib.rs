//! FibScroll library: configuration, dispatch, and exit codes for the
//! `fibscroll` binary.

pub mod app;
pub mod config;
pub mod errors;
