//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::constants::output_formats;
use crate::core::error::Result;

/// Standard config file name looked up in the working directory and parents
pub const CONFIG_FILE_NAME: &str = ".urldup.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// File extensions to process
    pub file_types: Option<Vec<String>>,

    /// Exact trimmed `url:` lines to ignore
    pub ignore_lines: Option<Vec<String>>,

    /// Line patterns to exclude (regex)
    pub exclude_patterns: Option<Vec<String>>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Recursively process subdirectories
    pub recursive: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_types: None,
            ignore_lines: None,
            exclude_patterns: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
            recursive: Some(false),
        }
    }
}

/// Configuration collected from CLI arguments, merged over file config
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub file_types: Option<Vec<String>>,
    pub ignore_lines: Option<Vec<String>>,
    pub exclude_patterns: Option<Vec<String>>,
    pub output_format: Option<String>,
    pub verbose: bool,
    pub quiet: bool,
    pub recursive: bool,
    pub config_file: Option<String>,
    pub no_config: bool,
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            crate::core::error::UrlDupError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            crate::core::error::UrlDupError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Validate the loaded configuration
        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .urldup.toml in current directory
        if let Ok(config) = Self::load_from_file(CONFIG_FILE_NAME) {
            return config;
        }

        // Check for .urldup.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}{}", "../".repeat(i), CONFIG_FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref file_types) = cli_config.file_types {
            self.file_types = Some(file_types.clone());
        }
        if let Some(ref ignore_lines) = cli_config.ignore_lines {
            self.ignore_lines = Some(ignore_lines.clone());
        }
        if let Some(ref exclude_patterns) = cli_config.exclude_patterns {
            self.exclude_patterns = Some(exclude_patterns.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if cli_config.recursive {
            self.recursive = Some(true);
        }
    }

    /// Compile exclude patterns into regex objects
    pub fn compile_exclude_patterns(&self) -> Result<Vec<Regex>> {
        let mut compiled = Vec::new();
        if let Some(ref patterns) = self.exclude_patterns {
            for pattern in patterns {
                compiled.push(Regex::new(pattern)?);
            }
        }
        Ok(compiled)
    }

    /// Convert file_types to HashSet for compatibility
    pub fn file_types_as_set(&self) -> Option<HashSet<String>> {
        self.file_types
            .as_ref()
            .map(|types| types.iter().cloned().collect())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate output format
        if let Some(ref format) = self.output_format {
            if !output_formats::ALL.contains(&format.as_str()) {
                return Err(crate::core::error::UrlDupError::Config(format!(
                    "Unknown output format '{}'. Expected one of: {}.",
                    format,
                    output_formats::ALL.join(", ")
                )));
            }
        }

        // Validate exclude patterns compile
        self.compile_exclude_patterns()?;

        Ok(())
    }
}
