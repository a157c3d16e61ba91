//! Account lifecycle over the world state

use tracing::{debug, info, warn};

use super::types::Account;
use crate::encoding::{decode_record, encode_record, DecodeError};
use crate::error::{LedgerError, LedgerResult};
use crate::storage::{account_key, StateError, WorldState};

/// Creates and looks up accounts. Holds no state of its own; every call
/// reads fresh from the backing store.
pub struct AccountStore<'a, S: WorldState + ?Sized> {
    state: &'a S,
}

impl<'a, S: WorldState + ?Sized> AccountStore<'a, S> {
    pub fn new(state: &'a S) -> Self {
        Self { state }
    }

    /// Create-if-absent. `args` must hold exactly one account id.
    pub fn create_account(&self, args: &[String]) -> LedgerResult<()> {
        let id = match args {
            [id] if !id.is_empty() => id.as_str(),
            [_] => {
                return Err(LedgerError::InvalidArgument(
                    "account id must not be empty".to_string(),
                ))
            }
            _ => {
                return Err(LedgerError::InvalidArgument(format!(
                    "createAccount accepts a single account id, got {} arguments",
                    args.len()
                )))
            }
        };
        info!("Creating account {}", id);

        let account = Account::open(id);
        let bytes = encode_record(&account)?;
        let key = account_key(id);

        let existing = match self.state.get_state(&key) {
            Ok(existing) => existing,
            Err(StateError::NotFound(_)) => {
                debug!("No existing record at {}", key);
                return self.write_new(&key, &bytes);
            }
            Err(StateError::Backend(e)) => {
                return Err(LedgerError::Storage(format!(
                    "failed to read existing account {}: {}",
                    id, e
                )))
            }
        };

        // The store may answer a missing key with an empty value, so the
        // payload decides whether an account is really there.
        match decode_record::<Account>(&existing) {
            Ok(found) => {
                warn!("Account already exists for {} ({})", id, found.prefix);
                Err(LedgerError::AlreadyExists(id.to_string()))
            }
            Err(e) if e.is_absence() => {
                debug!("Record at {} carries no account ({}), initializing", key, e);
                self.write_new(&key, &bytes)
            }
            Err(e) => Err(LedgerError::CorruptState {
                key,
                reason: e.to_string(),
            }),
        }
    }

    fn write_new(&self, key: &str, bytes: &[u8]) -> LedgerResult<()> {
        self.state.put_state(key, bytes).map_err(|e| {
            LedgerError::Storage(format!("failed to initialize account at {}: {}", key, e))
        })?;
        info!("Created account {}", key);
        Ok(())
    }

    pub fn get_account(&self, id: &str) -> LedgerResult<Account> {
        let key = account_key(id);
        let bytes = self.state.get_state(&key).map_err(|e| match e {
            StateError::NotFound(_) => LedgerError::NotFound(format!("account {}", id)),
            StateError::Backend(e) => LedgerError::Storage(e),
        })?;

        // Only a value with no content reads as missing; a record cut short
        // is damage here, even though creation may overwrite it.
        decode_record(&bytes).map_err(|e| match e {
            DecodeError::Empty => LedgerError::NotFound(format!("account {}", id)),
            e => LedgerError::CorruptState {
                key,
                reason: e.to_string(),
            },
        })
    }
}
