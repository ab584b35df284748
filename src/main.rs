use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::warn;

use expense_tracker::cli::{
    handle_add, handle_config, handle_stats, handle_totals, run_menu, AddExpenseInput, Prompter,
};
use expense_tracker::config::paths::DATA_FILE_ENV;
use expense_tracker::config::{ExpensePaths, Settings};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Records dated expenses in a CSV file and reports totals per \
                  category and overall spending statistics. Run without a \
                  subcommand for the interactive menu."
)]
struct Cli {
    /// Ledger CSV file (default: expenses.csv in the current directory)
    #[arg(short, long, global = true, env = DATA_FILE_ENV)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (the default)
    Menu,

    /// Add an expense
    Add {
        /// Date as MM/DD/YYYY, or "today"
        #[arg(short, long, default_value = "today")]
        date: String,
        /// Amount, zero or more
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Free-text description
        #[arg(long, visible_alias = "desc")]
        description: Option<String>,
    },

    /// Show expense totals by category
    #[command(alias = "view")]
    Totals,

    /// Show expense statistics
    #[command(alias = "statistics")]
    Stats,

    /// Show configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Settings are optional; problems with them never block the ledger
    let paths = ExpensePaths::new();
    let settings = match &paths {
        Ok(paths) => Settings::load_or_warn(paths),
        Err(e) => {
            warn!("{}; using default settings", e);
            Settings::default()
        }
    };
    let data_file = settings.data_file(cli.file);
    let currency = settings.currency_symbol.as_str();

    let mut stdout = io::stdout().lock();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut prompter = Prompter::new(io::stdin().lock(), stdout);
            run_menu(data_file, currency, &mut prompter)?;
        }
        Commands::Add {
            date,
            amount,
            category,
            description,
        } => {
            let input = AddExpenseInput {
                date,
                amount,
                category,
                description: description.unwrap_or_default(),
            };
            handle_add(&data_file, &input, currency, &mut stdout)?;
        }
        Commands::Totals => handle_totals(&data_file, currency, &mut stdout)?,
        Commands::Stats => handle_stats(&data_file, currency, &mut stdout)?,
        Commands::Config => handle_config(&paths?, &settings, &data_file, &mut stdout)?,
    }

    Ok(())
}
