//! Account type definitions

use serde::{Deserialize, Serialize};

use crate::encoding::null_as_empty;

/// Account identifier - human-readable name
pub type AccountId = String;

/// Literal appended to the id to form the display prefix.
pub const PREFIX_SUFFIX: &str = "000A";

/// Cash every new account starts with.
pub const INITIAL_CASH_BALANCE: f64 = 1_000_000.0;

/// Missing fields decode as zero values so older records still read.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Account {
    pub id: AccountId,
    pub prefix: String,
    #[serde(rename = "cashBalance")]
    pub cash_balance: f64,
    #[serde(rename = "assetIds", deserialize_with = "null_as_empty")]
    pub asset_ids: Vec<String>,
}

impl Account {
    /// A freshly opened account: seeded cash, no holdings.
    pub fn open(id: &str) -> Self {
        Self {
            id: id.to_string(),
            prefix: format!("{}{}", id, PREFIX_SUFFIX),
            cash_balance: INITIAL_CASH_BALANCE,
            asset_ids: Vec::new(),
        }
    }
}
