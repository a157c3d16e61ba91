use std::error::Error;

use super::Commands;
use crate::chaincode::Chaincode;
use crate::config::LedgerConfig;
use crate::paper::generate_suffix;
use crate::storage::{SledState, WorldState};

/// Renders query bytes for the terminal.
pub fn render(bytes: &[u8], as_hex: bool) -> String {
    if as_hex {
        hex::encode(bytes)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

pub fn open_chaincode(config: &LedgerConfig) -> Result<Chaincode<SledState>, Box<dyn Error>> {
    let state = SledState::open(&config.store.db_path, config.store.missing_key)?;
    Ok(Chaincode::new(state))
}

/// Runs one command and returns what should be printed, if anything.
/// `open` is only called for commands that touch the world state.
pub fn run_command<S, F>(cmd: Commands, open: F) -> Result<Option<String>, Box<dyn Error>>
where
    S: WorldState,
    F: FnOnce() -> Result<Chaincode<S>, Box<dyn Error>>,
{
    let output = match cmd {
        Commands::Cusip {
            issue_date,
            tenor_days,
        } => Some(generate_suffix(&issue_date, tenor_days)?),
        Commands::Init => {
            open()?.init("init", &[])?;
            None
        }
        Commands::Invoke { function, args } => {
            open()?.invoke(&function, &args)?;
            None
        }
        Commands::Query {
            function,
            args,
            hex,
        } => Some(render(&open()?.query(&function, &args)?, hex)),
    };
    Ok(output)
}
