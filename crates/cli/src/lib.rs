//! Glyphmap CLI library.

pub mod cli;

pub use cli::Cli;
