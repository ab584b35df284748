//! CLI command handlers
//!
//! The interactive menu, the prompts it is built from, and the
//! non-interactive subcommands.

pub mod commands;
pub mod menu;
pub mod prompt;

pub use commands::{handle_add, handle_config, handle_stats, handle_totals, AddExpenseInput};
pub use menu::{run as run_menu, MenuChoice};
pub use prompt::Prompter;
