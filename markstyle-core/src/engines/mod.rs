// markstyle-core/src/engines/mod.rs
//! This module contains styling engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `StylingEngine` trait. This modular design allows for easy addition of
//! new markup dialects.
//!
//! To add a new engine, create a new file (e.g., `wiki_engine.rs`), define
//! its logic, and declare it here using `pub mod <engine_name>;`.

pub mod markdown;
