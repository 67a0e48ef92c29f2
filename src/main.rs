use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spendview::cli::{
    handle_export_command, handle_list_command, handle_stats_command, ExportArgs, SourceArgs,
    ViewArgs,
};
use spendview::config::{paths::SpendviewPaths, settings::Settings};
use spendview::storage::initialize_storage;

#[derive(Parser)]
#[command(
    name = "spendview",
    version,
    about = "Group, filter and summarize expenses from the terminal",
    long_about = "spendview reads an expense list (an API dump or a CSV file), \
                  groups it by month and week, filters it by date window and \
                  free-text search, and summarizes today's and this month's spending."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List expenses grouped by month and week
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// Also show today's and this month's totals
        #[arg(long)]
        stats: bool,
    },

    /// Show today's and this month's totals with the category breakdown
    Stats {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Export a grouped view as CSV, JSON or YAML
    Export(ExportArgs),

    /// Create the data directory, settings and an empty expense list
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = SpendviewPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::List { view, stats }) => {
            handle_list_command(&paths, &settings, &view, stats)?;
        }
        Some(Commands::Stats { source }) => {
            handle_stats_command(&paths, &settings, &source)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&paths, &settings, &args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing spendview at: {}", paths.base_dir().display());
            let created = initialize_storage(&paths)?;
            settings.save(&paths)?;
            if created {
                println!("Created empty expense list: {}", paths.expenses_file().display());
            } else {
                println!("Keeping existing expense list: {}", paths.expenses_file().display());
            }
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("spendview Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Expense file:     {}", paths.expenses_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            if !paths.is_initialized() {
                println!();
                println!("Not initialized yet; run 'spendview init' to save these settings.");
            }
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  First day of week: {}", settings.week_start());
            println!("  Time basis:        {:?}", settings.time_basis);
            println!("  Breakdown limit:   {}", settings.breakdown_limit);
        }
        None => {
            println!("spendview - expense grouping and statistics");
            println!();
            println!("Run 'spendview --help' for usage information.");
            println!("Run 'spendview list' to see your expenses.");
        }
    }

    Ok(())
}
