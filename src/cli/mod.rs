pub mod ledger;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cp-ledger")]
#[command(about = "Commercial paper ledger state CLI", long_about = None)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = "cp-ledger.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seed the bookkeeping keys
    Init,
    /// Run a state-changing function (createAccount)
    Invoke {
        function: String,
        args: Vec<String>,
    },
    /// Run a read-only function (GetCompany, or any name for a raw key read)
    Query {
        function: String,
        args: Vec<String>,
        /// Print the result hex-encoded instead of as text
        #[arg(long)]
        hex: bool,
    },
    /// Compute the CUSIP maturity suffix for an issue
    Cusip {
        /// Issue date as epoch milliseconds
        #[arg(allow_hyphen_values = true)]
        issue_date: String,
        /// Days from issue to maturity
        #[arg(allow_hyphen_values = true)]
        tenor_days: i64,
    },
}
