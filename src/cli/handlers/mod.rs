//! CLI command handlers

pub mod check;
pub mod config;
pub mod index;

pub use check::handle_check;
pub use config::handle_config;
pub use index::handle_index;
