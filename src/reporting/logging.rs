use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log file processing information
pub fn log_file_info<P: AsRef<Path>>(file_count: usize, files: &[P]) {
    info!("Scanning {file_count} file(s)");
    for (i, file) in files.iter().enumerate() {
        debug!("  {}. {}", i + 1, file.as_ref().display());
    }
}

/// Log url line discovery information
pub fn log_line_discovery(unique_values: usize, total_found: usize) {
    info!("Found {unique_values} unique url line(s) (from {total_found} total)");
}

/// Log scan completion
pub fn log_scan_complete(unique_values: usize, duplicates: usize, duration_ms: u128) {
    if duplicates == 0 {
        info!("✅ Scan complete: {unique_values} unique url line(s), no duplicates ({duration_ms}ms)");
    } else {
        warn!(
            "❌ Scan complete: {unique_values} unique url line(s), {duplicates} duplicated ({duration_ms}ms)"
        );
    }
}

/// Log individual duplicate groups for debugging
pub fn log_duplicate_group(text: &str, file_names: &[&str]) {
    debug!("✗ {text} -> {}", file_names.join(", "));
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
