use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application to track faculty attendance with SQLite
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: record faculty check-ins/outs, 8-hour shift status, and daily analytics using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Manage the database (integrity checks, maintenance, info)
    Db {
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

    /// Register a new faculty member in the roster
    Register {
        /// Faculty ID (unique)
        id: String,

        /// Full name
        name: String,

        /// Department
        department: String,
    },

    /// Record a Check-In or Check-Out for a faculty member
    Check {
        /// Faculty ID
        id: String,

        /// Action: in (Check-In) or out (Check-Out)
        action: String,

        /// Event timestamp override (YYYY-MM-DD HH:MM:SS), defaults to now
        #[arg(long = "at", hide = true)]
        at: Option<String>,
    },

    /// Show the attendance status report (8-hour shift check)
    Report {
        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,

        #[arg(
            long = "export",
            value_name = "FILE",
            help = "Export the report to a CSV file"
        )]
        export: Option<String>,
    },

    /// Show daily attendance analytics
    Analytics {
        /// Day to aggregate (YYYY-MM-DD), defaults to today
        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "json", help = "Print the analytics as JSON")]
        json: bool,
    },
}
