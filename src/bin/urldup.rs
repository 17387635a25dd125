use clap::{CommandFactory, Parser};
use urldup::config::{CliConfig, Config};
use urldup::core::constants::{exit_codes, output_formats};
use urldup::discovery::path_utils::expand_paths;
use urldup::discovery::{Finder, UrlLineFinder};
use urldup::registry::{DuplicateGroup, UrlRegistry};
use urldup::reporting::logging;
use urldup::ui::completion::print_completions;
use urldup::ui::output;
use urldup::ui::{Cli, Commands, cli_to_config};

use std::path::Path;

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    // Run the main scan logic
    match run_urldup_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(exit_codes::SCAN_FAILED);
        }
    }
}

/// Handle completion commands and return exit code if one was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Main scan logic extracted from main() for testing
pub fn run_urldup_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    // Parse CLI arguments into CliConfig using the derive-based CLI
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;
    config.validate()?;

    // Setup logging and output settings
    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);

    // Expand the scan target into regular files
    let expanded_paths = process_and_expand_files(cli, &config)?;

    // Display scan info if needed
    if output_settings.should_show_scan_info() {
        output::display_scan_info(&expanded_paths);
    }

    // Find and filter url lines
    let start_time = std::time::Instant::now();
    let occurrences = find_and_filter_url_lines(&expanded_paths, &config)?;
    let url_lines_found = occurrences.len();

    // Accumulate occurrences into the registry and collect duplicates
    let registry: UrlRegistry = occurrences.into_iter().collect();
    let groups = registry.duplicate_groups();

    logging::log_line_discovery(registry.unique_count(), url_lines_found);
    for group in &groups {
        logging::log_duplicate_group(group.text(), &group.file_names());
    }
    logging::log_scan_complete(
        registry.unique_count(),
        groups.len(),
        start_time.elapsed().as_millis(),
    );

    // Display final results and determine exit code
    let metadata = output::DisplayMetadata {
        files_scanned: expanded_paths.len(),
        url_lines_found,
        unique_urls: registry.unique_count(),
        duplicates_found: groups.len(),
    };
    output::display_results(
        &groups,
        &metadata,
        &output_settings.output_format,
        output_settings.quiet,
    );

    Ok(determine_exit_code(&groups))
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
}

impl OutputSettings {
    pub fn should_show_scan_info(&self) -> bool {
        !self.quiet && self.output_format == output_formats::TEXT
    }
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    let quiet = cli_config.quiet;
    let verbose = config.verbose.unwrap_or(false);
    let output_format = config
        .output_format
        .as_deref()
        .unwrap_or(output_formats::DEFAULT)
        .to_string();

    OutputSettings {
        quiet,
        verbose,
        output_format,
    }
}

/// Validate the scan target and expand it into file paths
pub fn process_and_expand_files(
    cli: &Cli,
    config: &Config,
) -> Result<Vec<std::path::PathBuf>, Box<dyn std::error::Error>> {
    let path = Path::new(&cli.path);

    if !path.exists() {
        let error_msg = format!("Path not found: '{}'", path.display());
        logging::log_error(&error_msg, None);
        return Err(error_msg.into());
    }

    let recursive = config.recursive.unwrap_or(false);
    let expanded_paths = expand_paths(vec![path], recursive, config.file_types_as_set().as_ref())
        .inspect_err(|e| {
            logging::log_error("Could not expand file paths", Some(e));
        })?;

    // An empty directory is a clean scan, not an error
    if expanded_paths.is_empty() {
        logging::log_warning(&format!(
            "No files found to scan in '{}'",
            path.display()
        ));
    }

    logging::log_file_info(expanded_paths.len(), &expanded_paths);

    Ok(expanded_paths)
}

/// Find url lines in files and apply ignore-list and exclude-pattern filtering
pub fn find_and_filter_url_lines(
    expanded_paths: &[std::path::PathBuf],
    config: &Config,
) -> Result<Vec<urldup::UrlOccurrence>, Box<dyn std::error::Error>> {
    let finder = Finder::default();
    let file_paths: Vec<&Path> = expanded_paths.iter().map(|p| p.as_path()).collect();

    let occurrences = finder.find_url_lines(file_paths).inspect_err(|e| {
        logging::log_error("Could not scan files for url lines", Some(e));
    })?;

    // Apply ignore-list filtering
    let occurrences: Vec<_> = if let Some(ref ignore_lines) = config.ignore_lines {
        occurrences
            .into_iter()
            .filter(|occurrence| !ignore_lines.iter().any(|line| line == occurrence.text()))
            .collect()
    } else {
        occurrences
    };

    // Apply exclude patterns if configured
    let filtered = if config.exclude_patterns.is_some() {
        let compiled_patterns = config.compile_exclude_patterns().inspect_err(|e| {
            logging::log_error("Could not compile exclude patterns", Some(e));
        })?;

        occurrences
            .into_iter()
            .filter(|occurrence| {
                !compiled_patterns
                    .iter()
                    .any(|pattern| pattern.is_match(occurrence.text()))
            })
            .collect()
    } else {
        occurrences
    };

    Ok(filtered)
}

/// Exit code 1 on any duplicate group, 0 on a clean scan
pub fn determine_exit_code(groups: &[DuplicateGroup]) -> i32 {
    if groups.is_empty() {
        exit_codes::NO_DUPLICATES
    } else {
        exit_codes::DUPLICATES_FOUND
    }
}
