use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, UrlDupError};

/// Expand input paths into the list of regular files to scan.
///
/// A file argument passes straight through (subject to the extension filter).
/// A directory is listed non-recursively by default, keeping only its regular
/// files; with `recursive` the walk descends into subdirectories honoring
/// gitignore rules. Results are sorted so repeated runs over an unchanged
/// directory scan files in the same order.
pub fn expand_paths(
    input_paths: Vec<&Path>,
    recursive: bool,
    file_types: Option<&HashSet<String>>,
) -> Result<Vec<PathBuf>> {
    let mut result_paths = Vec::new();

    for path in input_paths {
        if path.is_file() {
            if matches_file_types(path, file_types) {
                result_paths.push(path.to_path_buf());
            }
        } else if path.is_dir() && recursive {
            let mut builder = ignore::WalkBuilder::new(path);
            builder.hidden(false); // Include hidden files

            for entry in builder.build() {
                let entry = entry?;
                let entry_path = entry.path();

                if entry_path.is_file() && matches_file_types(entry_path, file_types) {
                    result_paths.push(entry_path.to_path_buf());
                }
            }
        } else if path.is_dir() {
            // Flat listing: regular files only, subdirectories and special
            // entries are skipped
            for entry in std::fs::read_dir(path)? {
                let entry = entry?;
                let entry_path = entry.path();

                if entry_path.is_file() && matches_file_types(&entry_path, file_types) {
                    result_paths.push(entry_path);
                }
            }
        } else {
            return Err(UrlDupError::PathExpansion(format!(
                "'{}' is neither a file nor a directory",
                path.display()
            )));
        }
    }

    result_paths.sort();
    Ok(result_paths)
}

fn matches_file_types(path: &Path, file_types: Option<&HashSet<String>>) -> bool {
    match file_types {
        Some(extensions) => match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => extensions.contains(ext),
            // Include files without extensions if "" is in the set
            None => extensions.contains(""),
        },
        None => true,
    }
}
