use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;

pub const ACCOUNT_PREFIX: &str = "acct:";
pub const PAPER_PREFIX: &str = "cp:";
pub const PAPER_KEYS: &str = "PaperKeys";

pub fn account_key(id: &str) -> String {
    format!("{}{}", ACCOUNT_PREFIX, id)
}

pub fn paper_key(cusip: &str) -> String {
    format!("{}{}", PAPER_PREFIX, cusip)
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("no value stored at {0}")]
    NotFound(String),
    #[error("backend failure: {0}")]
    Backend(String),
}

/// How a backend reports a read of a key that was never written.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceSignal {
    /// `Err(StateError::NotFound)`
    #[default]
    NotFound,
    /// `Ok` with zero bytes, the way the host ledger answers.
    EmptyValue,
}

impl AbsenceSignal {
    fn missing(self, key: &str) -> Result<Vec<u8>, StateError> {
        match self {
            AbsenceSignal::NotFound => Err(StateError::NotFound(key.to_string())),
            AbsenceSignal::EmptyValue => Ok(Vec::new()),
        }
    }
}

/// Narrow view of the world state: single-key reads and writes.
pub trait WorldState {
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StateError>;
    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StateError>;
}

impl<T: WorldState + ?Sized> WorldState for &T {
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StateError> {
        (**self).get_state(key)
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StateError> {
        (**self).put_state(key, value)
    }
}

#[derive(Default)]
struct MemoryInner {
    entries: BTreeMap<String, Vec<u8>>,
    writes: usize,
}

/// In-process world state, mostly for tests and dry runs.
#[derive(Default)]
pub struct MemoryState {
    inner: Mutex<MemoryInner>,
    absence: AbsenceSignal,
}

impl MemoryState {
    pub fn new(absence: AbsenceSignal) -> Self {
        Self {
            inner: Mutex::new(MemoryInner::default()),
            absence,
        }
    }

    /// Places a raw value without counting it as a write.
    pub fn seed(&self, key: &str, value: &[u8]) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.entries.insert(key.to_string(), value.to_vec());
        }
    }

    /// Number of successful `put_state` calls so far.
    pub fn write_count(&self) -> usize {
        self.inner.lock().map(|inner| inner.writes).unwrap_or(0)
    }
}

impl WorldState for MemoryState {
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StateError> {
        let inner = self.inner.lock().map_err(|e| StateError::Backend(e.to_string()))?;
        match inner.entries.get(key) {
            Some(value) => Ok(value.clone()),
            None => self.absence.missing(key),
        }
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StateError> {
        let mut inner = self.inner.lock().map_err(|e| StateError::Backend(e.to_string()))?;
        inner.entries.insert(key.to_string(), value.to_vec());
        inner.writes += 1;
        Ok(())
    }
}

/// World state persisted in a sled tree.
pub struct SledState {
    db: sled::Db,
    absence: AbsenceSignal,
}

impl SledState {
    pub fn open(path: impl AsRef<Path>, absence: AbsenceSignal) -> Result<Self, StateError> {
        let db = sled::open(path).map_err(|e| StateError::Backend(e.to_string()))?;
        Ok(Self { db, absence })
    }

    pub fn from_db(db: sled::Db, absence: AbsenceSignal) -> Self {
        Self { db, absence }
    }
}

impl WorldState for SledState {
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StateError> {
        match self.db.get(key.as_bytes()) {
            Ok(Some(value)) => Ok(value.to_vec()),
            Ok(None) => self.absence.missing(key),
            Err(e) => Err(StateError::Backend(e.to_string())),
        }
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StateError> {
        self.db
            .insert(key.as_bytes(), value)
            .map_err(|e| StateError::Backend(e.to_string()))?;
        self.db
            .flush()
            .map_err(|e| StateError::Backend(e.to_string()))?;
        Ok(())
    }
}
