//! Output formatting and display logic for urldup

use crate::core::constants::{display, output_formats};
use crate::registry::DuplicateGroup;
use crate::ui::color::{Colors, colorize};

use std::path::PathBuf;

/// Metadata for displaying results
#[derive(Debug, Clone)]
pub struct DisplayMetadata {
    pub files_scanned: usize,
    pub url_lines_found: usize,
    pub unique_urls: usize,
    pub duplicates_found: usize,
}

/// Display which files are about to be scanned (text format only)
pub fn display_scan_info(expanded_paths: &[PathBuf]) {
    println!(
        "{} {}: {}",
        colorize(display::FILE_EMOJI, Colors::BRIGHT_CYAN),
        colorize(
            &format!("{}{}{}", Colors::BOLD, "Scanning", Colors::RESET),
            Colors::BRIGHT_CYAN
        ),
        colorize(
            &format!(
                "{}{} file{}{}",
                Colors::BOLD,
                expanded_paths.len(),
                if expanded_paths.len() == 1 { "" } else { "s" },
                Colors::RESET
            ),
            Colors::BRIGHT_WHITE
        )
    );

    // List files (limit to avoid spam)
    for (i, path) in expanded_paths
        .iter()
        .enumerate()
        .take(display::MAX_FILES_TO_DISPLAY)
    {
        println!(
            "   {}. {}",
            colorize(&format!("{}", i + 1), Colors::DIM),
            colorize(&path.display().to_string(), Colors::BLUE)
        );
    }
    if expanded_paths.len() > display::MAX_FILES_TO_DISPLAY {
        println!(
            "   {}",
            colorize(
                &format!(
                    "... and {} more files",
                    expanded_paths.len() - display::MAX_FILES_TO_DISPLAY
                ),
                Colors::DIM
            )
        );
    }
    println!();
}

/// Display scan results based on output format
pub fn display_results(
    groups: &[DuplicateGroup],
    metadata: &DisplayMetadata,
    output_format: &str,
    quiet: bool,
) {
    match output_format {
        output_formats::MINIMAL => display_minimal_output(groups),
        output_formats::JSON => display_json_output(groups, metadata),
        _ => display_text_output(groups, quiet),
    }
}

/// Display results in minimal format (no colors or summary decoration)
fn display_minimal_output(groups: &[DuplicateGroup]) {
    if groups.is_empty() {
        println!("no duplicate URLs found");
        return;
    }

    for group in groups {
        println!(
            "found duplicate {} used by {}",
            group.text(),
            group.file_names().join(", ")
        );
    }
}

/// Display results in JSON format
fn display_json_output(groups: &[DuplicateGroup], metadata: &DisplayMetadata) {
    let document = serde_json::json!({
        "status": if groups.is_empty() { "success" } else { "failure" },
        "files": {
            "scanned": metadata.files_scanned,
        },
        "url_lines": {
            "total_found": metadata.url_lines_found,
            "unique": metadata.unique_urls,
            "duplicated": metadata.duplicates_found,
        },
        "duplicates": groups,
    });

    println!("{document}");
}

/// Display results in text format with colors
fn display_text_output(groups: &[DuplicateGroup], quiet: bool) {
    if groups.is_empty() {
        if !quiet {
            println!(
                "{} {}",
                colorize(display::SUCCESS_EMOJI, Colors::BRIGHT_GREEN),
                colorize(
                    &format!(
                        "{}{}{}",
                        Colors::BOLD,
                        "no duplicate URLs found. Good job!",
                        Colors::RESET
                    ),
                    Colors::BRIGHT_GREEN
                )
            );
        }
        return;
    }

    for group in groups {
        println!(
            "{} found duplicate {} used by {}",
            colorize(display::ERROR_EMOJI, Colors::BRIGHT_RED),
            colorize(group.text(), Colors::CYAN),
            colorize(&group.file_names().join(", "), Colors::YELLOW)
        );
    }

    if !quiet {
        println!(
            "\n{}",
            colorize(
                &format!(
                    "{} duplicate URL{} found",
                    groups.len(),
                    if groups.len() == 1 { "" } else { "s" }
                ),
                Colors::BRIGHT_RED
            )
        );
    }
}
