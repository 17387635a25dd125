use std::fmt;

/// Comprehensive error types for urldup operations
#[derive(Debug)]
pub enum UrlDupError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Path expansion error
    PathExpansion(String),

    /// Regex compilation error
    Regex(regex::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// File not found error
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// File walking/ignore error
    FileWalking(ignore::Error),
}

impl fmt::Display for UrlDupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlDupError::Io(err) => write!(f, "IO error: {err}"),
            UrlDupError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlDupError::PathExpansion(msg) => write!(f, "Path expansion error: {msg}"),
            UrlDupError::Regex(err) => write!(f, "Regex error: {err}"),
            UrlDupError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            UrlDupError::FileNotFound(path) => write!(f, "File not found: {path}"),
            UrlDupError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            UrlDupError::FileWalking(err) => write!(f, "File walking error: {err}"),
        }
    }
}

impl std::error::Error for UrlDupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlDupError::Io(err) => Some(err),
            UrlDupError::Regex(err) => Some(err),
            UrlDupError::TomlParsing(err) => Some(err),
            UrlDupError::FileWalking(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlDupError {
    fn from(err: std::io::Error) -> Self {
        UrlDupError::Io(err)
    }
}

impl From<regex::Error> for UrlDupError {
    fn from(err: regex::Error) -> Self {
        UrlDupError::Regex(err)
    }
}

impl From<toml::de::Error> for UrlDupError {
    fn from(err: toml::de::Error) -> Self {
        UrlDupError::TomlParsing(err)
    }
}

impl From<ignore::Error> for UrlDupError {
    fn from(err: ignore::Error) -> Self {
        UrlDupError::FileWalking(err)
    }
}

/// Type alias for Results using UrlDupError
pub type Result<T> = std::result::Result<T, UrlDupError>;
