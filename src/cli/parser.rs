use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hourdash
/// CLI application to browse client hour logs and share billing dashboards
#[derive(Parser)]
#[command(
    name = "hourdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Client hours reporting CLI: browse a synced base snapshot, summarize billable time, share dashboards",
    long_about = None
)]
pub struct Cli {
    /// Override snapshot database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the URL fallback store path
    #[arg(global = true, long = "urls")]
    pub urls: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the snapshot database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Load a JSON export of the external base into the snapshot
    Import {
        /// Path of the export file
        file: String,
    },

    /// List clients with their dashboard URLs
    Clients {
        #[arg(long, help = "Emit the client list as JSON")]
        json: bool,
    },

    /// Show the hours dashboard of one client
    Hours {
        /// Client record id
        client_id: String,

        #[arg(
            long,
            value_name = "YYYY-MM",
            help = "Only entries of one calendar month"
        )]
        month: Option<String>,

        #[arg(long, value_name = "NAME", help = "Only entries of one consultant")]
        consultant: Option<String>,

        #[arg(long, help = "Emit entries and summary as JSON")]
        json: bool,
    },

    /// Generate (or regenerate) the shareable dashboard URL of a client
    Generate {
        /// Client record id
        client_id: String,

        #[arg(
            long = "base-url",
            value_name = "URL",
            help = "Base URL of the public dashboard host (overrides config)"
        )]
        base_url: Option<String>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the snapshot database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show snapshot information")]
        info: bool,
    },

    /// Export a client's hours view
    Export {
        #[arg(long, value_name = "CLIENT_ID", help = "Client record id")]
        client: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "YYYY-MM",
            help = "Only entries of one calendar month"
        )]
        month: Option<String>,

        #[arg(long, value_name = "NAME", help = "Only entries of one consultant")]
        consultant: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
