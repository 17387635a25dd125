/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful output with a summary
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - plain text without colors
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Process exit code constants
pub mod exit_codes {
    /// Scan completed and no duplicate groups were found
    pub const NO_DUPLICATES: i32 = 0;
    /// Scan completed and at least one duplicate group was found.
    /// CI consumers key off this value to fail their jobs.
    pub const DUPLICATES_FOUND: i32 = 1;
    /// The scan itself could not run (filesystem or configuration error)
    pub const SCAN_FAILED: i32 = 2;
}

/// Scan behavior constants
pub mod scan {
    /// Front-matter prefix that makes a line a candidate. Case-sensitive,
    /// matched at position 0 of the trimmed line.
    pub const URL_PREFIX: &str = "url:";
    /// Directory scanned when no path argument is given
    pub const DEFAULT_TARGET_DIR: &str = "content";
    /// Capacity hint for url lines per file
    pub const DEFAULT_LINE_CAPACITY_PER_FILE: usize = 8;
}

/// Display and formatting constants
pub mod display {
    /// Emoji for success status
    pub const SUCCESS_EMOJI: &str = "✅";
    /// Emoji for error status
    pub const ERROR_EMOJI: &str = "❌";
    /// Emoji for file information
    pub const FILE_EMOJI: &str = "📁";
    /// Maximum files to display in scan info before truncating
    pub const MAX_FILES_TO_DISPLAY: usize = 10;
}
