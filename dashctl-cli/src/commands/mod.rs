//! Command implementations for dashctl CLI

pub mod build;
pub mod config;
pub mod options;

// Re-export main dispatcher functions for flat access from main.rs
pub use build::{run_build, run_check};
pub use config::run_config;
pub use options::run_options;
