//! Skycast command-line interface
//!
//! Argument definitions and text rendering for the `skycast-cli` binary.

pub mod cli;
pub mod render;

pub use cli::{Cli, Commands, log_filter_from_verbosity};
