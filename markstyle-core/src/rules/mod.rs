//! Rule compilation for markstyle.
//!
//! This module turns validated `StyleRule` definitions into compiled
//! matchers ready for efficient scanning. It enforces the single-capture-
//! group contract at compile time, since a matcher with any other shape
//! would corrupt the offset remapping downstream.
//!
//! License: MIT OR Apache-2.0

pub mod compiler;
