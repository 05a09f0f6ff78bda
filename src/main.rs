use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use expense_tracker::cli::{handle_categories_command, handle_report_command, ReportArgs};
use expense_tracker::config::{paths::DATA_DIR_ENV, Settings, TrackerPaths};
use expense_tracker::logging::init_logger;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Terminal expense tracker with a budget",
    long_about = "Record expenses by category, amount and date, filter them by \
                  category, and see how the running total compares with your \
                  budget. Runs as an interactive TUI by default."
)]
struct Cli {
    /// Log level written to the log file (RUST_LOG overrides)
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    /// Directory for settings and logs
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Build an expense list from arguments and print it with totals
    Report(ReportArgs),

    /// List the category options
    Categories,

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::resolve(cli.data_dir)?;
    init_logger(&paths, cli.log_level)?;
    debug!("Log level set to {}", cli.log_level.to_string().to_lowercase());

    let settings = Settings::load_or_create(&paths)?;
    settings.validate()?;

    match cli.command {
        None | Some(Commands::Tui) => {
            expense_tracker::tui::run_tui(&settings)?;
        }
        Some(Commands::Report(args)) => {
            handle_report_command(&settings, args)?;
        }
        Some(Commands::Categories) => {
            handle_categories_command(&settings)?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!(
                    "Initialized settings at: {}",
                    paths.settings_file().display()
                );
            }
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Category mode:   {}", settings.category_mode);
            println!("  Categories:      {}", settings.categories.join(", "));
            println!("  Tick rate:       {}ms", settings.tick_rate_ms);
        }
    }

    Ok(())
}
