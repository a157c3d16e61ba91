//! Account records and their create-if-absent lifecycle.
//!
//! Accounts live in the world state under `acct:<id>`. They are created once,
//! read back on query, and never updated or deleted here.

pub mod types;
pub mod store;

pub use types::{Account, AccountId};
pub use store::AccountStore;
