// markstyle/src/lib.rs
//! # MarkStyle CLI Application
//!
//! This crate provides the command-line interface for the markstyle engine:
//! parsing markdown-flavored input into cleaned text plus ordered style
//! transforms, scanning for rule matches, and listing the effective rule set.

pub mod cli;
pub mod commands;
pub mod logger;
