use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// One sighting of a `url:` front-matter line in a content file.
///
/// The occurrence keeps the exact trimmed line text (prefix included, value
/// untouched) together with where it was seen, so duplicate groups can be
/// reported with their owning files and line numbers.
#[derive(Debug, Eq, PartialEq, Clone, Serialize)]
pub struct UrlOccurrence {
    /// The trimmed line text, e.g. `url: /posts/1`
    pub text: String,
    /// Line number where the line was found (1-indexed)
    pub line: u64,
    /// Name of file where the line was found
    pub file_name: String,
}

/// Builder for creating `UrlOccurrence` instances with validation.
#[derive(Debug, Default)]
pub struct UrlOccurrenceBuilder {
    text: Option<String>,
    line: Option<u64>,
    file_name: Option<String>,
}

/// Errors that can occur when building a `UrlOccurrence`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlOccurrenceError {
    /// Line text is missing or empty
    MissingText,
    /// Line number is missing
    MissingLine,
    /// File name is missing or empty
    MissingFileName,
    /// Line number is invalid (zero)
    InvalidLineNumber,
}

impl fmt::Display for UrlOccurrenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingText => write!(f, "Line text is required and cannot be empty"),
            Self::MissingLine => write!(f, "Line number is required"),
            Self::MissingFileName => write!(f, "File name is required and cannot be empty"),
            Self::InvalidLineNumber => write!(f, "Line number must be greater than 0"),
        }
    }
}

impl std::error::Error for UrlOccurrenceError {}

impl Ord for UrlOccurrence {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.text, &self.file_name, self.line).cmp(&(&other.text, &other.file_name, other.line))
    }
}

impl PartialOrd for UrlOccurrence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl UrlOccurrence {
    /// Create a new UrlOccurrence with validation.
    ///
    /// # Arguments
    /// * `text` - The trimmed line text (must not be empty)
    /// * `line` - Line number where the line was found (must be > 0)
    /// * `file_name` - Name of the file (must not be empty)
    ///
    /// # Examples
    /// ```
    /// use urldup::core::types::UrlOccurrence;
    ///
    /// let occurrence = UrlOccurrence::new(
    ///     "url: /posts/1".to_string(),
    ///     3,
    ///     "a.md".to_string()
    /// ).unwrap();
    /// assert_eq!(occurrence.text, "url: /posts/1");
    /// assert_eq!(occurrence.line, 3);
    /// ```
    pub fn new(text: String, line: u64, file_name: String) -> Result<Self, UrlOccurrenceError> {
        if text.trim().is_empty() {
            return Err(UrlOccurrenceError::MissingText);
        }
        if line == 0 {
            return Err(UrlOccurrenceError::InvalidLineNumber);
        }
        if file_name.trim().is_empty() {
            return Err(UrlOccurrenceError::MissingFileName);
        }

        Ok(Self {
            text: text.trim().to_string(),
            line,
            file_name: file_name.trim().to_string(),
        })
    }

    /// Create a new UrlOccurrence without validation.
    ///
    /// For internal use where validation has already been performed: the
    /// finder only hands over non-empty trimmed lines with 1-indexed line
    /// numbers.
    pub(crate) fn new_unchecked(text: String, line: u64, file_name: String) -> Self {
        Self {
            text,
            line,
            file_name,
        }
    }

    /// Create a builder for constructing UrlOccurrence instances.
    pub fn builder() -> UrlOccurrenceBuilder {
        UrlOccurrenceBuilder::default()
    }

    /// Get the line text as a string slice.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the line number.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Get the file name as a string slice.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl UrlOccurrenceBuilder {
    /// Set the line text for this occurrence.
    pub fn text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the line number for this occurrence.
    pub fn line(mut self, line: u64) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the file name for this occurrence.
    pub fn file_name<S: Into<String>>(mut self, file_name: S) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Build the UrlOccurrence, validating all required fields.
    pub fn build(self) -> Result<UrlOccurrence, UrlOccurrenceError> {
        let text = self.text.ok_or(UrlOccurrenceError::MissingText)?;
        let line = self.line.ok_or(UrlOccurrenceError::MissingLine)?;
        let file_name = self.file_name.ok_or(UrlOccurrenceError::MissingFileName)?;

        UrlOccurrence::new(text, line, file_name)
    }
}
