//! Record codec for world-state values.
//!
//! Every record is a field-tagged JSON document. Decoding reports *why* a value
//! could not be read so callers can tell an absent record (no bytes, or a value
//! cut short) apart from one that is actually damaged.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use thiserror::Error;

use crate::error::{LedgerError, LedgerResult};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("no content")]
    Empty,
    #[error("unexpected end of input: {0}")]
    Truncated(serde_json::Error),
    #[error("malformed record: {0}")]
    Malformed(serde_json::Error),
}

impl DecodeError {
    /// True when the bytes carry no record at all rather than a broken one.
    pub fn is_absence(&self) -> bool {
        matches!(self, DecodeError::Empty | DecodeError::Truncated(_))
    }
}

pub fn encode_record<T: Serialize>(value: &T) -> LedgerResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| LedgerError::Encoding(e.to_string()))
}

pub fn decode_record<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(DecodeError::Empty);
    }
    serde_json::from_slice(bytes).map_err(|e| match e.classify() {
        Category::Eof => DecodeError::Truncated(e),
        _ => DecodeError::Malformed(e),
    })
}

/// Accepts `null` for a list field, as written by older runtimes.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    let value: Option<Vec<T>> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_are_empty() {
        assert!(matches!(decode_record::<Vec<String>>(b""), Err(DecodeError::Empty)));
        assert!(matches!(decode_record::<Vec<String>>(b" \n"), Err(DecodeError::Empty)));
    }

    #[test]
    fn test_cut_short_is_truncated() {
        let err = decode_record::<Vec<String>>(br#"["a", "b"#).unwrap_err();
        assert!(matches!(err, DecodeError::Truncated(_)));
        assert!(err.is_absence());
    }

    #[test]
    fn test_garbage_is_malformed() {
        let err = decode_record::<Vec<String>>(b"not-json").unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
        assert!(!err.is_absence());

        // Well-formed JSON of the wrong shape is damage too, not absence.
        let err = decode_record::<Vec<String>>(br#"{"id": 5}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn test_encode_writes_json() {
        let bytes = encode_record(&vec!["x".to_string()]).unwrap();
        assert_eq!(bytes, br#"["x"]"#);
    }
}
