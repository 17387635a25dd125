//! Shell completion generation

use clap::Command;
use clap_complete::{Generator, generate};

/// Print completions for the given shell to stdout
pub fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut std::io::stdout(),
    );
}
