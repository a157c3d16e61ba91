use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cp_ledger::cli::ledger::{open_chaincode, run_command};
use cp_ledger::cli::Cli;
use cp_ledger::config::LedgerConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Config loading logs before the configured filter is known.
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || {
        LedgerConfig::load_or_default(&cli.config)
    });

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    debug!("Using store at {}", config.store.db_path);

    // Errors surface once, through main's return value.
    let output = run_command(cli.command, || open_chaincode(&config))?;

    if let Some(text) = output {
        println!("{}", text);
    }
    Ok(())
}
