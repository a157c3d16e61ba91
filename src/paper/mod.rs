//! Commercial paper records and maturity-code generation.

pub mod cusip;
pub mod types;

pub use cusip::{generate_suffix, issue_instant};
pub use types::{CommercialPaper, Owner, Transaction};
