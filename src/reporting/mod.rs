//! Progress reporting and logging
//!
//! Structured logging for scan progress and diagnostics.

pub mod logging;
