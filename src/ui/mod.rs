//! User interface components
//!
//! Command-line parsing, terminal colors, and result display.

pub mod cli;
pub mod color;
pub mod completion;
pub mod output;

pub use cli::{Cli, Commands, cli_to_config};
