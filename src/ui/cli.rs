// Command-line interface definitions and parsing for urldup

use crate::config::CliConfig;
use crate::core::constants::{output_formats, scan};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory or file to scan for duplicate url front matter
    #[arg(value_name = "PATH", default_value = scan::DEFAULT_TARGET_DIR)]
    pub path: String,

    // Core Options
    /// Recursively process subdirectories
    #[arg(short = 'r', long, help_heading = "Core Options")]
    pub recursive: bool,

    // Filtering & Content
    /// File extensions to process (e.g., md,markdown,txt)
    #[arg(long, value_name = "EXTENSIONS", help_heading = "Filtering & Content")]
    pub include: Option<String>,

    /// url lines to ignore (comma-separated, compared after trimming)
    #[arg(long, value_name = "LINES", help_heading = "Filtering & Content")]
    pub ignore: Option<String>,

    /// Line patterns to exclude (regex)
    #[arg(long, value_name = "REGEX", help_heading = "Filtering & Content")]
    pub exclude_pattern: Vec<String>,

    // Output & Verbosity
    /// Suppress informational output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, default_value = output_formats::DEFAULT, help_heading = "Output & Verbosity")]
    pub format: String,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completions", arg_required_else_help = true)]
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert parsed CLI arguments into the CliConfig merged over file config
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let mut cli_config = CliConfig {
        quiet: cli.quiet,
        verbose: cli.verbose,
        recursive: cli.recursive,
        no_config: cli.no_config,
        config_file: cli.config.clone(),
        output_format: Some(cli.format.clone()),
        ..Default::default()
    };

    if let Some(ref include_str) = cli.include {
        cli_config.file_types = Some(
            include_str
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
        );
    }

    if let Some(ref ignore_str) = cli.ignore {
        cli_config.ignore_lines = Some(
            ignore_str
                .split(',')
                .filter_map(|s| {
                    if s.trim().is_empty() {
                        None
                    } else {
                        Some(s.trim().to_string())
                    }
                })
                .collect(),
        );
    }

    if !cli.exclude_pattern.is_empty() {
        cli_config.exclude_patterns = Some(cli.exclude_pattern.clone());
    }

    cli_config
}
