use crate::core::calculator::week::WeekOrder;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hours
/// Daily clock-in/clock-out tracker with weekly totals, backed by SQLite
#[derive(Parser)]
#[command(
    name = "hours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track daily clock-in/clock-out times and weekly totals using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend the current time is "YYYY-MM-DD HH:MM"
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Clock in (defaults: today, current time)
    In {
        #[arg(long = "date", help = "Day to clock in on (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "at", help = "Clock-in time (HH:MM)")]
        at: Option<String>,
    },

    /// Clock out (defaults: today, current time)
    Out {
        #[arg(long = "date", help = "Day to clock out on (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "at", help = "Clock-out time (HH:MM)")]
        at: Option<String>,
    },

    /// Set a day's clock-in and clock-out times
    Edit {
        /// Date to edit (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        end: Option<String>,
    },

    /// Clear a day's clock-in and clock-out (the day is kept)
    Del {
        date: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List days grouped by week, with totals
    List {
        #[arg(
            long,
            short,
            help = "all, week, YYYY, YYYY-MM, YYYY-MM-DD or a range A:B"
        )]
        period: Option<String>,

        #[arg(long, value_enum, help = "Week order (defaults to the configured one)")]
        order: Option<WeekOrder>,
    },

    /// Export a weekly summary or the stored days
    Export {
        #[arg(long, value_enum, default_value = "text")]
        format: ExportFormat,

        #[arg(long, value_name = "DATE", help = "Any day of the week to export (default: today)")]
        week: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Export a period instead of a single week (same syntax as list --period)"
        )]
        range: Option<String>,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, help = "Copy the result to the system clipboard")]
        clipboard: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show today's state and the week total; --tap clocks in or out
    Widget {
        #[arg(long, help = "Press the widget button")]
        tap: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
