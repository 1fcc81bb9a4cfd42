use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rsvs-meal")]
#[command(about = "Meal claim companion for the RSVS hostel mess system")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show which meals are claimable right now (IST)
    Status {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Claim a meal (breakfast, lunch, snacks, dinner)
    Claim {
        /// Meal to claim
        meal: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Dry run mode (don't contact the backend)
        #[arg(long)]
        dry_run: bool,

        /// Skip the local window pre-check and let the backend decide
        #[arg(long)]
        force: bool,
    },

    /// Re-evaluate the claim windows on an interval and log transitions
    Watch {
        /// Refresh interval in seconds
        #[arg(short, long, default_value = "60")]
        interval: u64,
    },

    /// Show claims journaled by this tool
    History {
        /// Limit number of entries
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show journal statistics
    Stats {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Initialize the claim journal and show the configuration
    Init,
}
