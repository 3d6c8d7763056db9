use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add, handle_by_category, handle_delete, handle_edit, handle_export, handle_extremes,
    handle_list, handle_plot, handle_summary, handle_total, handle_trend, ExportFormat, PlotKind,
};
use expense_tracker::config::TrackerPaths;
use expense_tracker::services::{SortDirection, SortKey};
use expense_tracker::storage::ExpenseStore;
use expense_tracker::web;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "File-backed personal expense tracker",
    long_about = "Track personal expenses in a flat JSON file: record entries, \
                  query totals, category breakdowns, trends and extremes, render \
                  charts, and browse everything through a small web UI."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add {
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Category, free-form
        #[arg(short, long)]
        category: String,
        /// Amount spent
        #[arg(short, long)]
        amount: f64,
        /// Optional note
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// List expenses with their positional indices
    List {
        /// Field to sort by
        #[arg(short, long, value_enum, default_value_t = SortKey::Date)]
        sort: SortKey,
        /// Sort direction
        #[arg(short = 'r', long, value_enum, default_value_t = SortDirection::Asc)]
        dir: SortDirection,
    },

    /// Replace the expense at a positional index
    Edit {
        /// Index shown by `list`
        index: usize,
        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Category, free-form
        #[arg(short, long)]
        category: String,
        /// Amount spent
        #[arg(short, long)]
        amount: f64,
        /// Optional note
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// Delete the expense at a positional index
    Delete {
        /// Index shown by `list`
        index: usize,
    },

    /// Print the total of all expenses
    Total,

    /// Print totals grouped by category
    ByCategory,

    /// Print totals per date, or per month with --monthly
    Trend {
        /// Aggregate by month instead of by day
        #[arg(long)]
        monthly: bool,
    },

    /// Print the highest- and lowest-spending categories
    Extremes,

    /// Print the overview statistics
    Summary,

    /// Render a chart of your expenses to an SVG file
    Plot {
        /// Type of chart
        #[arg(value_enum)]
        what: PlotKind,
        /// (only for 'trend') aggregate by month instead of daily
        #[arg(long)]
        monthly: bool,
        /// Output file (defaults to categories.svg / trend.svg)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export all expenses as CSV or JSON
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Launch the web UI
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 5000)]
        port: u16,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    paths.ensure_directories()?;
    let store = ExpenseStore::new(paths.expenses_file());

    match cli.command {
        Commands::Add {
            date,
            category,
            amount,
            note,
        } => handle_add(&store, date, category, amount, note)?,
        Commands::List { sort, dir } => handle_list(&store, sort, dir)?,
        Commands::Edit {
            index,
            date,
            category,
            amount,
            note,
        } => handle_edit(&store, index, date, category, amount, note)?,
        Commands::Delete { index } => handle_delete(&store, index)?,
        Commands::Total => handle_total(&store)?,
        Commands::ByCategory => handle_by_category(&store)?,
        Commands::Trend { monthly } => handle_trend(&store, monthly)?,
        Commands::Extremes => handle_extremes(&store)?,
        Commands::Summary => handle_summary(&store)?,
        Commands::Plot {
            what,
            monthly,
            output,
        } => handle_plot(&store, what, monthly, output)?,
        Commands::Export { format, output } => handle_export(&store, format, output)?,
        Commands::Serve { port } => web::serve(paths.expenses_file(), port)?,
    }

    Ok(())
}
