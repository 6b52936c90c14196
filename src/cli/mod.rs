//! CLI module for the `ramarag` binary
//!
//! This module contains all CLI-related functionality including:
//! - Command line argument parsing
//! - Command handlers (organized by domain in handlers/ subdirectory)
//! - Styled output formatting

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::*;
