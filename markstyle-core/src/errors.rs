//! errors.rs - Custom error types for the markstyle-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `markstyle-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MarkStyleError {
    #[error("Failed to compile style rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    /// A matcher must capture exactly one group: the content to keep.
    /// Anything else would corrupt the offset remapping, so it is rejected
    /// up front instead of producing garbage ranges.
    #[error("Rule '{rule}': matcher must define exactly one capture group (found {groups})")]
    MissingCaptureGroup { rule: String, groups: usize },

    /// The injected style sink refused the transforms (e.g. the host object
    /// is not a styleable text target). The core does not recover from this.
    #[error("'{0}' is not a styleable target")]
    NotStyleable(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
