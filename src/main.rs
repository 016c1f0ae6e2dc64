use anyhow::Result;
use clap::{Parser, Subcommand};

use pnl_tracker::cli::{
    handle_categories_command, handle_config_command, handle_overview_command,
    handle_range_command, OverviewArgs, RangeArgs,
};
use pnl_tracker::config::{logging, Settings, TrackerPaths};

#[derive(Parser)]
#[command(
    name = "pnl",
    author = "Kaylee Beyene",
    version,
    about = "Track household spending against monthly category budgets",
    long_about = "P&L Tracker records expenses by category and payer, and shows \
                  how much of each monthly budget has been used over a chosen \
                  date range. Run without a subcommand to open the TUI."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Show the date range a filter resolves to
    Range(RangeArgs),

    /// List categories and their monthly budgets
    Categories,

    /// Summarise spend per category for a set of expenses
    Overview(OverviewArgs),

    /// Write a default settings file to edit
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;

    match cli.command {
        None | Some(Commands::Tui) => {
            logging::init_file(&paths)?;
            let settings = Settings::load_or_create(&paths)?;
            pnl_tracker::tui::run_tui(&settings)?;
        }
        Some(Commands::Range(args)) => {
            logging::init_stderr();
            handle_range_command(&args)?;
        }
        Some(Commands::Categories) => {
            logging::init_stderr();
            let settings = Settings::load_or_create(&paths)?;
            handle_categories_command(&settings)?;
        }
        Some(Commands::Overview(args)) => {
            logging::init_stderr();
            let settings = Settings::load_or_create(&paths)?;
            handle_overview_command(&settings, &args)?;
        }
        Some(Commands::Init) => {
            logging::init_stderr();
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                Settings::default().save(&paths)?;
                println!("Wrote default settings to: {}", paths.settings_file().display());
                println!();
                println!("Edit categories, budgets and payers there, then run 'pnl' to start.");
            }
        }
        Some(Commands::Config) => {
            logging::init_stderr();
            let settings = Settings::load_or_create(&paths)?;
            handle_config_command(&paths, &settings)?;
        }
    }

    Ok(())
}
