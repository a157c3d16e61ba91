//! World-state logic for a commercial paper ledger: account records with a
//! create-if-absent lifecycle, paper records, and the CUSIP maturity suffix.

pub mod account;
pub mod chaincode;
pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod paper;
pub mod storage;

pub use chaincode::Chaincode;
pub use error::{LedgerError, LedgerResult};
