//! urldup - detect duplicate `url:` front-matter lines across content files
//!
//! Content directories for static sites commonly declare each page's address
//! with a `url:` front-matter line. Two files claiming the same address is a
//! publishing bug that is easy to introduce and hard to spot in review, so
//! this crate scans a directory, groups identical trimmed `url:` lines, and
//! reports every line declared more than once. The binary exits non-zero on
//! duplicates so CI jobs can fail.
//!
//! The scan is deliberately literal: lines are compared by exact string
//! equality after trimming surrounding whitespace, prefix included. No URL
//! normalization is performed.

pub mod config;
pub mod core;
pub mod discovery;
pub mod registry;
pub mod reporting;
pub mod ui;

// Re-export commonly used items at the crate root
pub use crate::core::error::{Result, UrlDupError};
pub use crate::core::types::{UrlOccurrence, UrlOccurrenceBuilder, UrlOccurrenceError};
pub use crate::registry::{DuplicateGroup, UrlRegistry};
