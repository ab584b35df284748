//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - Optional user settings (currency symbol, default ledger file)

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
