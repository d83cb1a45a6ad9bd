//! CLI surface for skillwright
//!
//! The binary drives an interactive wizard (or a fully flag-driven run) that
//! selects platforms and packs, gathers project settings, shows the file
//! estimate for confirmation, and runs the generation pipeline against the
//! working directory.

pub mod cli;
pub mod detect;
pub mod init;
pub mod output;
pub mod prompt;

pub use cli::{Cli, Command, InitArgs};
