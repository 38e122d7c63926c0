//! # whassup-cli
//!
//! Argument parsing, configuration and terminal rendering for the `whassup` binary.

pub mod cli;
pub mod config;
pub mod render;

pub use cli::{Cli, Commands};
pub use config::WhassupConfig;
